use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::{
    app_state::AppState, domain::VerifyTokenResponse, errors::VerifyTokenError,
    utils::auth::bearer_token,
};

pub async fn verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, VerifyTokenError> {
    let token = bearer_token(&headers).ok_or(VerifyTokenError::MissingToken)?;

    // Signature, issuer, audience and expiry are all checked here.
    let claims = state
        .token_codec
        .verify(token)
        .map_err(|_| VerifyTokenError::InvalidToken)?;

    Ok((
        StatusCode::OK,
        Json(VerifyTokenResponse {
            valid: true,
            subject: claims.sub,
            expires_at: claims.exp,
        }),
    ))
}
