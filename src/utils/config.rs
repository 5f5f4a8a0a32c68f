use std::env;

use base64::engine::general_purpose::{STANDARD as B64_STD, URL_SAFE_NO_PAD as B64_URL};
use base64::Engine;
use chrono::Duration;
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::consts::{
    env as keys, DEFAULT_API_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_DATABASE_URL, DEFAULT_TOKEN_TTL,
};

static TTL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s*(ms|s|secs?|seconds?|m|mins?|minutes?|h|hrs?|hours?|d|days?|w|weeks?)?\s*$")
        .expect("ttl pattern compiles")
});

#[derive(Clone, Debug)]
pub struct Config {
    jwt_secret: Vec<u8>,
    token_ttl: Duration,
    database_url: String,
    bind_address: String,
    cors_allowed_origin: Option<String>,
    bootstrap_admin: Option<(String, String)>,
}

impl Config {
    /// Config with the given signing material and defaults for everything else.
    pub fn new(jwt_secret: impl Into<Vec<u8>>, token_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            cors_allowed_origin: None,
            bootstrap_admin: None,
        }
    }

    pub fn jwt_secret(&self) -> &[u8] {
        &self.jwt_secret
    }
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }
    pub fn cors_allowed_origin(&self) -> Option<&str> {
        self.cors_allowed_origin.as_deref()
    }
    pub fn bootstrap_admin(&self) -> Option<(&str, &str)> {
        self.bootstrap_admin
            .as_ref()
            .map(|(user, pass)| (user.as_str(), pass.as_str()))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = match opt_var(keys::JWT_SECRET_B64_ENV_VAR) {
            Some(b64) => decode_b64_any(&b64)
                .map_err(|_| ConfigError::Decode(keys::JWT_SECRET_B64_ENV_VAR))?,
            None => req_var(keys::JWT_SECRET_ENV_VAR)?.into_bytes(),
        };
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid(keys::JWT_SECRET_ENV_VAR));
        }
        if jwt_secret.len() < 32 {
            tracing::warn!(
                len = jwt_secret.len(),
                "JWT secret is shorter than 32 bytes; use a longer secret in production"
            );
        }

        let ttl_raw =
            opt_var(keys::TOKEN_TTL_ENV_VAR).unwrap_or_else(|| DEFAULT_TOKEN_TTL.to_owned());
        let token_ttl =
            parse_ttl(&ttl_raw).ok_or(ConfigError::Invalid(keys::TOKEN_TTL_ENV_VAR))?;

        let database_url = opt_var(keys::DATABASE_URL_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let bind_address = opt_var(keys::BIND_ADDRESS_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());
        let cors_allowed_origin = opt_var(keys::CORS_ALLOWED_ORIGIN_ENV_VAR);

        let bootstrap_admin = match (
            opt_var(keys::ADMIN_USERNAME_ENV_VAR),
            opt_var(keys::ADMIN_PASSWORD_ENV_VAR),
        ) {
            (Some(user), Some(pass)) => Some((user, pass)),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Invalid(
                    "ADMIN_USERNAME and ADMIN_PASSWORD must be set together",
                ))
            }
        };

        Ok(Self {
            jwt_secret,
            token_ttl,
            database_url,
            bind_address,
            cors_allowed_origin,
            bootstrap_admin,
        })
    }
}

/// Settings for the client side of the session lifecycle.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let _ = dotenv();
        let api_base_url = opt_var(keys::API_BASE_URL_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("decode error in {0}")]
    Decode(&'static str),
}

/// Parses token lifetimes written as `3600`, `90s`, `15m`, `12h`, `7d`,
/// `7 days` or `2w`. A bare number is seconds.
pub fn parse_ttl(raw: &str) -> Option<Duration> {
    let caps = TTL_RE.captures(raw)?;
    let amount: i64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();

    let ttl = match unit.as_str() {
        "ms" => Duration::try_milliseconds(amount),
        "" | "s" | "sec" | "secs" | "second" | "seconds" => Duration::try_seconds(amount),
        "m" | "min" | "mins" | "minute" | "minutes" => Duration::try_minutes(amount),
        "h" | "hr" | "hrs" | "hour" | "hours" => Duration::try_hours(amount),
        "d" | "day" | "days" => Duration::try_days(amount),
        "w" | "week" | "weeks" => Duration::try_weeks(amount),
        _ => None,
    }?;

    (ttl > Duration::zero()).then_some(ttl)
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn decode_b64_any(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    // Try URL-safe (no padding) first, then standard.
    B64_URL.decode(s).or_else(|_| B64_STD.decode(s))
}
