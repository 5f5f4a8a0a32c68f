use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub subject: String,
    pub expires_at: i64,
}
