mod change_password;
mod login;
mod verify_token;

pub use change_password::*;
pub use login::*;
pub use verify_token::*;
