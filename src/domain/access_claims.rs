use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::TokenError;

/// Claim names owned by the codec; payloads may not set them.
pub const RESERVED_CLAIMS: [&str; 6] = ["sub", "iss", "aud", "exp", "iat", "jti"];

/// Identity carried by a credential: a subject plus primitive-valued claims.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPayload {
    subject: String,
    claims: Map<String, Value>,
}

impl TokenPayload {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            claims: Map::new(),
        }
    }

    /// Adds a claim. Nested arrays/objects and reserved names are rejected.
    pub fn with_claim(mut self, name: &str, value: impl Into<Value>) -> Result<Self, TokenError> {
        let value = value.into();
        if RESERVED_CLAIMS.contains(&name) {
            return Err(TokenError::ReservedClaim(name.to_string()));
        }
        if value.is_array() || value.is_object() {
            return Err(TokenError::NonPrimitiveClaim(name.to_string()));
        }
        self.claims.insert(name.to_string(), value);
        Ok(self)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String, // Subject (user ID)
    pub iss: String, // Issuer
    pub aud: String, // Audience
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at time
    pub jti: String, // JWT ID
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccessClaims {
    /// The payload the credential was issued for.
    pub fn payload(&self) -> TokenPayload {
        TokenPayload {
            subject: self.sub.clone(),
            claims: self.extra.clone(),
        }
    }
}
