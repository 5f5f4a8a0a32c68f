use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::LoginRequestBody;
use crate::errors::LoginError;
use crate::services::AuthService;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let username = request.username.trim();
    if username.is_empty() || request.password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }

    let response = AuthService::login(&state, username, &request.password)
        .await
        .inspect_err(|e| {
            if let LoginError::InvalidCredentials = e {
                tracing::warn!("rejected login attempt");
            }
        })?;

    Ok((StatusCode::OK, Json(response)))
}
