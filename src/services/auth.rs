use crate::app_state::AppState;
use crate::domain::{
    AccessClaims, LoginResponse, NewUser, Password, TokenPayload, User, UserStoreError, Username,
};
use crate::errors::{ChangePasswordError, LoginError};

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and issues a token. Unknown users and wrong
    /// passwords produce the same error.
    pub async fn login(
        state: &AppState,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, LoginError> {
        let user = state
            .user_store
            .read()
            .await
            .validate_user(username, password)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound | UserStoreError::InvalidCredentials => {
                    LoginError::InvalidCredentials
                }
                _ => LoginError::InternalServerError,
            })?;

        let payload = TokenPayload::new(user.id.to_string())
            .with_claim("username", user.username.as_ref())
            .map_err(|_| LoginError::InternalServerError)?;
        let token = state
            .token_codec
            .issue(&payload)
            .map_err(|_| LoginError::InternalServerError)?;

        tracing::info!(user_id = user.id, "user logged in");

        Ok(LoginResponse {
            token,
            user: user.profile(),
        })
    }

    pub async fn change_password(
        state: &AppState,
        claims: &AccessClaims,
        current_password: &str,
        new_password: String,
    ) -> Result<(), ChangePasswordError> {
        let new_password =
            Password::parse(new_password).map_err(ChangePasswordError::InvalidPassword)?;
        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| ChangePasswordError::InvalidToken)?;

        let user = {
            let user_store = state.user_store.read().await;
            let user = user_store
                .get_user_by_id(user_id)
                .await
                .map_err(|e| match e {
                    UserStoreError::UserNotFound => ChangePasswordError::InvalidToken,
                    _ => ChangePasswordError::InternalServerError,
                })?;

            user_store
                .validate_user(user.username.as_ref(), current_password)
                .await
                .map_err(|e| match e {
                    UserStoreError::InvalidCredentials => ChangePasswordError::IncorrectPassword,
                    _ => ChangePasswordError::InternalServerError,
                })?;
            user
        };

        // Only the write itself holds the store exclusively.
        state
            .user_store
            .write()
            .await
            .update_password(user.id, new_password)
            .await
            .map_err(|_| ChangePasswordError::InternalServerError)?;

        tracing::info!(user_id = user.id, "password changed");
        Ok(())
    }

    /// Creates the configured super-admin account unless it already exists.
    pub async fn ensure_admin(
        state: &AppState,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, UserStoreError> {
        let username = Username::parse(username.to_owned()).map_err(|e| {
            tracing::error!(error = %e, "bootstrap admin username rejected");
            UserStoreError::UnexpectedError
        })?;
        let password = Password::parse(password.to_owned()).map_err(|e| {
            tracing::error!(error = %e, "bootstrap admin password rejected");
            UserStoreError::UnexpectedError
        })?;

        let new_user = NewUser::new(username, password, "Administrator").super_admin();
        match state.user_store.write().await.add_user(new_user).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "bootstrap admin created");
                Ok(Some(user))
            }
            Err(UserStoreError::UserAlreadyExists) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
