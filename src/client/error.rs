use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// Bad credentials, as reported by the gateway.
    #[error("{0}")]
    Auth(String),

    /// Input rejected by client-side rules or by the gateway.
    #[error("{0}")]
    Validation(String),

    #[error("Session expired, please log in again")]
    SessionExpired,

    /// The gateway refused the stored credential. The session has been cleared.
    #[error("{0}")]
    InvalidToken(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from server ({0})")]
    UnexpectedStatus(u16),
}
