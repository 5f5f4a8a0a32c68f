use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::activity::ActivityMonitor;
use super::error::ClientError;
use crate::domain::{
    ChangePasswordRequestBody, ChangePasswordResponse, ErrorResponse, LoginRequestBody,
    LoginResponse, UserProfile,
};
use crate::utils::config::ClientConfig;
use crate::utils::consts::error_codes::INVALID_TOKEN;
use crate::utils::consts::MIN_PASSWORD_LENGTH;
use crate::validation::is_valid_password;

/// Calls the auth gateway and keeps the session store in step with it.
pub struct AuthClient {
    http: Client,
    base_url: String,
    monitor: ActivityMonitor,
}

impl AuthClient {
    pub fn new(config: &ClientConfig, monitor: ActivityMonitor) -> Self {
        Self::with_http_client(Client::new(), config, monitor)
    }

    pub fn with_http_client(http: Client, config: &ClientConfig, monitor: ActivityMonitor) -> Self {
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            monitor,
        }
    }

    pub fn monitor(&self) -> &ActivityMonitor {
        &self.monitor
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Logs in and stores the new session.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ClientError> {
        let body = LoginRequestBody {
            username: username.to_owned(),
            password: password.to_owned(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let LoginResponse { token, user } = response.json().await?;
                self.monitor.store().save(&user, &token)?;
                Ok(user)
            }
            StatusCode::UNAUTHORIZED => Err(ClientError::Auth(error_message(response).await)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(error_message(response).await)),
            status => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }

    /// Input rules are checked before anything is sent; an expired session
    /// is reported without contacting the gateway.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
        confirmation: &str,
    ) -> Result<Option<String>, ClientError> {
        if !is_valid_password(new_password) {
            return Err(ClientError::Validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }
        if new_password != confirmation {
            return Err(ClientError::Validation("Passwords do not match".to_string()));
        }

        if !self.monitor.is_authenticated() {
            return Err(ClientError::SessionExpired);
        }
        let token = self
            .monitor
            .store()
            .current_token()
            .ok_or(ClientError::SessionExpired)?;

        let body = ChangePasswordRequestBody {
            current_password: current_password.to_owned(),
            new_password: new_password.to_owned(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/changePassword"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let result: Option<ChangePasswordResponse> = read_json(response).await;
        let message = result.as_ref().and_then(|r| r.message.clone());
        let token_rejected = result
            .as_ref()
            .and_then(|r| r.code.as_deref())
            .is_some_and(|code| code == INVALID_TOKEN);

        match status {
            StatusCode::OK => Ok(message),
            StatusCode::UNAUTHORIZED if token_rejected => {
                tracing::info!("gateway rejected the stored credential, logging out");
                self.monitor.logout()?;
                Err(ClientError::InvalidToken(
                    message.unwrap_or_else(|| "Invalid or expired token".to_string()),
                ))
            }
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(
                message.unwrap_or_else(|| "Invalid password".to_string()),
            )),
            StatusCode::UNAUTHORIZED => Err(ClientError::Auth(
                message.unwrap_or_else(|| "Not authorized".to_string()),
            )),
            status => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.monitor.logout()?;
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Option<T> {
    match response.json::<T>().await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::debug!(error = %e, "response body is not the expected json");
            None
        }
    }
}

async fn error_message(response: Response) -> String {
    read_json::<ErrorResponse>(response)
        .await
        .map(|body| body.message)
        .unwrap_or_else(|| "Request was rejected".to_string())
}
