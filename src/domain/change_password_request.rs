use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct ChangePasswordRequestBody {
    pub current_password: String,
    pub new_password: String,
}
