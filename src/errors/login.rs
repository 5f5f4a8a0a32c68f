use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ErrorResponse;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Username and password are required.")]
    MissingCredentials,

    // One message for unknown user and wrong password.
    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::MissingCredentials => StatusCode::BAD_REQUEST,
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            message: self.to_string(),
            code: None,
        });
        (status, body).into_response()
    }
}
