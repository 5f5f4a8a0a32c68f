pub mod sql_user_store;

pub use sql_user_store::*;
