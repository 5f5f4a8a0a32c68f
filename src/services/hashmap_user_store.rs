use std::collections::HashMap;

use crate::domain::{NewUser, Password, User, UserStore, UserStoreError};
use crate::services::password_hashing::{hash_password, verify_password, verify_unknown_user};

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<String, StoredUser>,
    last_id: i64,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_user_count(&self) -> usize {
        self.users.len()
    }

    fn find_by_id(&self, id: i64) -> Option<&StoredUser> {
        self.users.values().find(|stored| stored.user.id == id)
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, UserStoreError> {
        if self.users.contains_key(new_user.username.as_ref()) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let password_hash = hash_password(new_user.password.as_ref()).await?;
        self.last_id += 1;
        let user = User {
            id: self.last_id,
            username: new_user.username,
            display_name: new_user.display_name,
            permissions: new_user.permissions,
            is_super_admin: new_user.is_super_admin,
        };

        self.users.insert(
            user.username.as_ref().to_owned(),
            StoredUser {
                user: user.clone(),
                password_hash,
            },
        );
        Ok(user)
    }

    async fn get_user(&self, username: &str) -> Result<User, UserStoreError> {
        self.users
            .get(username)
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<User, UserStoreError> {
        self.find_by_id(id)
            .map(|stored| stored.user.clone())
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn validate_user(&self, username: &str, password: &str) -> Result<User, UserStoreError> {
        let Some(stored) = self.users.get(username) else {
            verify_unknown_user(password).await?;
            return Err(UserStoreError::UserNotFound);
        };

        if verify_password(password, &stored.password_hash).await? {
            Ok(stored.user.clone())
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }

    async fn update_password(&mut self, id: i64, password: Password) -> Result<(), UserStoreError> {
        let username = self
            .find_by_id(id)
            .map(|stored| stored.user.username.as_ref().to_owned())
            .ok_or(UserStoreError::UserNotFound)?;

        let password_hash = hash_password(password.as_ref()).await?;
        if let Some(stored) = self.users.get_mut(&username) {
            stored.password_hash = password_hash;
        }
        Ok(())
    }
}
