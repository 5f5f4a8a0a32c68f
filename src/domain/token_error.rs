use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("invalid token")]
    InvalidToken,

    #[error("token lifetime must be positive")]
    InvalidTtl,

    #[error("claim {0} is reserved")]
    ReservedClaim(String),

    #[error("claim {0} must be a string, number, bool or null")]
    NonPrimitiveClaim(String),

    #[error("failed to sign token")]
    Signing,
}
