//! Client side of the session lifecycle.
//!
//! The front-end runtime owns the session: a [`SessionStore`] persists the
//! user profile, the credential and the last-activity timestamp in a
//! [`SessionStorage`], and an [`ActivityMonitor`] decides on every
//! authenticated action whether the session is still fresh. [`AuthClient`]
//! talks to the gateway and feeds the store.

pub mod activity;
pub mod api;
pub mod clock;
pub mod error;
pub mod session_store;
pub mod storage;

pub use activity::ActivityMonitor;
pub use api::AuthClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ClientError, StorageError};
pub use session_store::SessionStore;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
