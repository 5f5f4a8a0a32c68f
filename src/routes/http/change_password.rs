use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{ChangePasswordRequestBody, ChangePasswordResponse};
use crate::errors::ChangePasswordError;
use crate::services::AuthService;
use crate::utils::auth::bearer_token;

pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChangePasswordRequestBody>,
) -> Result<impl IntoResponse, ChangePasswordError> {
    let token = bearer_token(&headers).ok_or(ChangePasswordError::MissingToken)?;
    let claims = state
        .token_codec
        .verify(token)
        .map_err(|_| ChangePasswordError::InvalidToken)?;

    AuthService::change_password(
        &state,
        &claims,
        &request.current_password,
        request.new_password,
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ChangePasswordResponse {
            success: true,
            message: Some("Password updated successfully".to_string()),
            code: None,
        }),
    ))
}
