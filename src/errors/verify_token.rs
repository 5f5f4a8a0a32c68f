use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ErrorResponse;
use crate::utils::consts::error_codes::INVALID_TOKEN;

#[derive(Error, Debug)]
pub enum VerifyTokenError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,
}

impl IntoResponse for VerifyTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            VerifyTokenError::MissingToken => StatusCode::UNAUTHORIZED,
            VerifyTokenError::InvalidToken => StatusCode::UNAUTHORIZED,
        };

        let body = Json(ErrorResponse {
            message: self.to_string(),
            code: Some(INVALID_TOKEN.to_string()),
        });
        (status, body).into_response()
    }
}
