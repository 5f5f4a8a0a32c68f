use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ChangePasswordResponse;
use crate::utils::consts::error_codes::INVALID_TOKEN;

#[derive(Error, Debug)]
pub enum ChangePasswordError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for ChangePasswordError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ChangePasswordError::MissingToken => StatusCode::UNAUTHORIZED,
            ChangePasswordError::InvalidToken => StatusCode::UNAUTHORIZED,
            ChangePasswordError::InvalidPassword(_) => StatusCode::BAD_REQUEST,
            ChangePasswordError::IncorrectPassword => StatusCode::UNAUTHORIZED,
            ChangePasswordError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let code = match &self {
            ChangePasswordError::MissingToken | ChangePasswordError::InvalidToken => {
                Some(INVALID_TOKEN.to_string())
            }
            _ => None,
        };

        let body = Json(ChangePasswordResponse {
            success: false,
            message: Some(self.to_string()),
            code,
        });
        (status, body).into_response()
    }
}
