use super::UserStoreError;
use crate::domain::{NewUser, Password, User};

// This trait represents the interface all concrete user stores should implement
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user(&self, username: &str) -> Result<User, UserStoreError>;
    async fn get_user_by_id(&self, id: i64) -> Result<User, UserStoreError>;
    /// Returns the user only when `password` matches the stored hash.
    async fn validate_user(&self, username: &str, password: &str) -> Result<User, UserStoreError>;
    async fn update_password(&mut self, id: i64, password: Password)
        -> Result<(), UserStoreError>;
}
