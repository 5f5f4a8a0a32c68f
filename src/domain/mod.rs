pub mod access_claims;
pub mod change_password_request;
pub mod change_password_response;
pub mod data_stores;
pub mod error_response;
pub mod login_request;
pub mod login_response;
pub mod models;
pub mod password;
pub mod permissions;
pub mod token_error;
pub mod username;
pub mod verify_token_response;
mod user;

pub use access_claims::*;
pub use change_password_request::*;
pub use change_password_response::*;
pub use data_stores::*;
pub use error_response::*;
pub use login_request::*;
pub use login_response::*;
pub use models::*;
pub use password::*;
pub use permissions::*;
pub use token_error::*;
pub use user::*;
pub use username::*;
pub use verify_token_response::*;
