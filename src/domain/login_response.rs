use serde::{Deserialize, Serialize};

use super::UserProfile;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}
