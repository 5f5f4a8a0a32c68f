use welds::connections::any::AnyClient;
use welds::prelude::*;

use crate::domain::{
    NewUser, Password, Permissions, User, UserModel, UserStore, UserStoreError, Username,
};
use crate::services::password_hashing::{hash_password, verify_password, verify_unknown_user};

pub struct SqlUserStore {
    client: AnyClient,
}

impl SqlUserStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }

    async fn find_model(&self, username: &str) -> Result<DbState<UserModel>, UserStoreError> {
        let mut rows = UserModel::where_col(|u| u.username.equal(username))
            .limit(1)
            .run(&self.client)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "user lookup failed");
                UserStoreError::UnexpectedError
            })?;

        rows.pop().ok_or(UserStoreError::UserNotFound)
    }

    async fn find_model_by_id(&self, id: i64) -> Result<DbState<UserModel>, UserStoreError> {
        UserModel::find_by_id(&self.client, id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = id, "user lookup failed");
                UserStoreError::UnexpectedError
            })?
            .ok_or(UserStoreError::UserNotFound)
    }

    // Convert database UserModel to domain User
    fn from_user_model(user_model: &UserModel) -> Result<User, UserStoreError> {
        let username = Username::parse(user_model.username.clone()).map_err(|_| {
            tracing::error!(user_id = user_model.id, "invalid username in database");
            UserStoreError::UnexpectedError
        })?;

        Ok(User {
            id: user_model.id,
            username,
            display_name: user_model.display_name.clone(),
            permissions: Permissions::from_column(&user_model.permissions),
            is_super_admin: user_model.is_super_admin,
        })
    }
}

#[async_trait::async_trait]
impl UserStore for SqlUserStore {
    async fn add_user(&mut self, new_user: NewUser) -> Result<User, UserStoreError> {
        match self.find_model(new_user.username.as_ref()).await {
            Ok(_) => return Err(UserStoreError::UserAlreadyExists),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(e),
        }

        let password_hash = hash_password(new_user.password.as_ref()).await?;
        let now = chrono::Utc::now().timestamp();

        let mut user_model = UserModel::new();
        user_model.username = new_user.username.as_ref().to_string();
        user_model.password_hash = password_hash;
        user_model.display_name = new_user.display_name;
        user_model.permissions = new_user.permissions.to_column();
        user_model.is_super_admin = new_user.is_super_admin;
        user_model.created_at = now;
        user_model.updated_at = now;

        user_model.save(&self.client).await.map_err(|e| {
            tracing::error!(error = %e, "failed to insert user");
            UserStoreError::UnexpectedError
        })?;

        Self::from_user_model(&user_model)
    }

    async fn get_user(&self, username: &str) -> Result<User, UserStoreError> {
        let user_model = self.find_model(username).await?;
        Self::from_user_model(&user_model)
    }

    async fn get_user_by_id(&self, id: i64) -> Result<User, UserStoreError> {
        let user_model = self.find_model_by_id(id).await?;
        Self::from_user_model(&user_model)
    }

    async fn validate_user(&self, username: &str, password: &str) -> Result<User, UserStoreError> {
        let user_model = match self.find_model(username).await {
            Ok(user_model) => user_model,
            Err(UserStoreError::UserNotFound) => {
                verify_unknown_user(password).await?;
                return Err(UserStoreError::UserNotFound);
            }
            Err(e) => return Err(e),
        };

        if verify_password(password, &user_model.password_hash).await? {
            Self::from_user_model(&user_model)
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }

    async fn update_password(&mut self, id: i64, password: Password) -> Result<(), UserStoreError> {
        let mut user_model = self.find_model_by_id(id).await?;

        user_model.password_hash = hash_password(password.as_ref()).await?;
        user_model.updated_at = chrono::Utc::now().timestamp();

        user_model.save(&self.client).await.map_err(|e| {
            tracing::error!(error = %e, user_id = id, "failed to update password");
            UserStoreError::UnexpectedError
        })
    }
}
