use std::sync::Arc;

use super::clock::{Clock, SystemClock};
use super::error::StorageError;
use super::storage::SessionStorage;
use crate::domain::{AccessClaims, UserProfile};
use crate::services::token_codec;
use crate::utils::consts::storage_keys::{LAST_ACTIVITY, TOKEN, USER};

const SESSION_KEYS: [&str; 3] = [USER, TOKEN, LAST_ACTIVITY];

/// The persisted session record: `{user, token, lastActivity}`.
///
/// Handles are cheap to clone; clones over the same storage see the same
/// session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_clock(storage, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: Arc<dyn SessionStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Replaces any previous session in one write.
    pub fn save(&self, user: &UserProfile, token: &str) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set_all(&[
            (USER, user_json),
            (TOKEN, token.to_owned()),
            (LAST_ACTIVITY, self.now_millis().to_string()),
        ])?;
        tracing::debug!(user_id = user.id, "session saved");
        Ok(())
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = self.read(USER)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "stored user profile is unreadable");
                None
            }
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.read(TOKEN)
    }

    /// Epoch milliseconds of the last recorded activity.
    pub fn last_activity(&self) -> Option<i64> {
        self.read(LAST_ACTIVITY)?.trim().parse().ok()
    }

    pub fn set_last_activity(&self, at_millis: i64) -> Result<(), StorageError> {
        self.storage
            .set_all(&[(LAST_ACTIVITY, at_millis.to_string())])
    }

    /// Removes the whole record. Safe to call when nothing is stored.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_all(&SESSION_KEYS)?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Capability check for the logged-in user; false when logged out.
    pub fn can(&self, permission: &str) -> bool {
        self.current_user()
            .map(|user| user.can(permission))
            .unwrap_or(false)
    }

    /// Claims of the stored token, read without verification. For display
    /// and diagnostics only.
    pub fn inspect_token(&self) -> Option<AccessClaims> {
        token_codec::decode(&self.current_token()?).ok()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key, "session storage read failed");
                None
            }
        }
    }
}
