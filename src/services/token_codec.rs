/// Signed, time-bounded credentials.
///
/// Credentials are HS256 JWTs. Every token carries the fixed issuer and
/// audience, `iat`/`exp` in seconds since the epoch, a random `jti`, and the
/// primitive claims of the payload it was issued for.
///
/// - `issue` signs a payload for `ttl`.
/// - `verify` checks signature, issuer, audience and expiry (no leeway) and
///   returns the claims.
/// - `decode` reads claims without any check. It exists for diagnostics
///   only; nothing that grants access may call it.
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode as jwt_decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::{AccessClaims, TokenError, TokenPayload};
use crate::utils::config::Config;
use crate::utils::consts::{TOKEN_AUDIENCE, TOKEN_ISSUER};

pub fn issue(payload: &TokenPayload, secret: &[u8], ttl: Duration) -> Result<String, TokenError> {
    issue_at(payload, secret, ttl, Utc::now())
}

/// Same as [`issue`] with an explicit issue instant.
pub fn issue_at(
    payload: &TokenPayload,
    secret: &[u8],
    ttl: Duration,
    issued_at: DateTime<Utc>,
) -> Result<String, TokenError> {
    if ttl <= Duration::zero() {
        return Err(TokenError::InvalidTtl);
    }
    let exp = issued_at
        .checked_add_signed(ttl)
        .ok_or(TokenError::InvalidTtl)?;

    let claims = AccessClaims {
        sub: payload.subject().to_owned(),
        iss: TOKEN_ISSUER.to_owned(),
        aud: TOKEN_AUDIENCE.to_owned(),
        exp: exp.timestamp(),
        iat: issued_at.timestamp(),
        jti: Uuid::new_v4().to_string(),
        extra: payload.claims().clone(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|_| TokenError::Signing)
}

pub fn verify(token: &str, secret: &[u8]) -> Result<AccessClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_audience(&[TOKEN_AUDIENCE]);
    validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
    validation.leeway = 0;

    jwt_decode::<AccessClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|_| TokenError::InvalidToken)
}

/// Reads the claims without checking signature or expiry.
pub fn decode(token: &str) -> Result<AccessClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    jwt_decode::<AccessClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|_| TokenError::InvalidToken)
}

/// The gateway's codec: the configured secret and lifetime bundled together.
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret().to_vec(), config.token_ttl())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, payload: &TokenPayload) -> Result<String, TokenError> {
        issue(payload, &self.secret, self.ttl)
    }

    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        verify(token, &self.secret)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
