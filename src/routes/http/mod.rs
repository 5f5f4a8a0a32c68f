pub(crate) mod change_password;
pub(crate) mod login;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use change_password::*;
pub use login::*;
pub use verify_token::*;
