use std::time::Duration;

use super::error::StorageError;
use super::session_store::SessionStore;
use crate::utils::consts::SESSION_TIMEOUT;

/// Inactivity gate in front of every authenticated action.
///
/// `is_authenticated` checks and refreshes in one step, so callers that poll
/// it keep an idle session alive. UI handlers that react to real user input
/// should call `touch`; read-only views can use `remaining`, which does not
/// refresh.
#[derive(Clone)]
pub struct ActivityMonitor {
    store: SessionStore,
    timeout: Duration,
}

impl ActivityMonitor {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            timeout: SESSION_TIMEOUT,
        }
    }

    pub fn with_timeout(store: SessionStore, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn timeout_millis(&self) -> i64 {
        i64::try_from(self.timeout.as_millis()).unwrap_or(i64::MAX)
    }

    /// False when no session is stored or it has been idle for longer than
    /// the timeout (the session is cleared in that case). Otherwise records
    /// now as the last activity and returns true.
    pub fn is_authenticated(&self) -> bool {
        let token = self.store.current_token();
        let last_activity = self.store.last_activity();

        let last_activity = match (token, last_activity) {
            (Some(_), Some(at)) => at,
            (None, None) => return false,
            _ => {
                // Half a record is never exposed as a session.
                self.expire("incomplete session record");
                return false;
            }
        };

        let now = self.store.now_millis();
        if now.saturating_sub(last_activity) > self.timeout_millis() {
            self.expire("session idle timeout");
            return false;
        }

        if let Err(e) = self.store.set_last_activity(now) {
            tracing::warn!(error = %e, "failed to refresh session activity");
        }
        true
    }

    /// Records user activity. Does nothing when no session is stored.
    pub fn touch(&self) -> Result<(), StorageError> {
        if self.store.current_token().is_none() {
            return Ok(());
        }
        self.store.set_last_activity(self.store.now_millis())
    }

    /// Time left before the session expires, without refreshing it.
    pub fn remaining(&self) -> Option<Duration> {
        self.store.current_token()?;
        let idle = self
            .store
            .now_millis()
            .saturating_sub(self.store.last_activity()?);
        let left = self.timeout_millis().checked_sub(idle.max(0))?;
        (left >= 0).then(|| Duration::from_millis(left as u64))
    }

    /// Drops the session. Same as logging out.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.store.clear()
    }

    fn expire(&self, reason: &'static str) {
        tracing::info!(reason, "session expired");
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear expired session");
        }
    }
}
