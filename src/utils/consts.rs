use std::time::Duration;

pub const TOKEN_ISSUER: &str = "backoffice-auth";
pub const TOKEN_AUDIENCE: &str = "backoffice-web";

/// Idle time after which the client drops the session.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(60 * 60);

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const JWT_SECRET_B64_ENV_VAR: &str = "JWT_SECRET_B64";
    pub const TOKEN_TTL_ENV_VAR: &str = "TOKEN_TTL";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const BIND_ADDRESS_ENV_VAR: &str = "BIND_ADDRESS";
    pub const CORS_ALLOWED_ORIGIN_ENV_VAR: &str = "CORS_ALLOWED_ORIGIN";
    pub const ADMIN_USERNAME_ENV_VAR: &str = "ADMIN_USERNAME";
    pub const ADMIN_PASSWORD_ENV_VAR: &str = "ADMIN_PASSWORD";
    pub const API_BASE_URL_ENV_VAR: &str = "API_BASE_URL";
}

pub const DEFAULT_TOKEN_TTL: &str = "7d";
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Machine-readable `code` values carried by gateway error bodies.
pub mod error_codes {
    pub const INVALID_TOKEN: &str = "invalid_token";
}

pub mod storage_keys {
    pub const USER: &str = "user";
    pub const TOKEN: &str = "token";
    pub const LAST_ACTIVITY: &str = "lastActivity";
}
