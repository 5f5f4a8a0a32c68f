pub mod auth;
pub mod data_stores;
pub mod hashmap_user_store;
pub mod password_hashing;
pub mod token_codec;

pub use auth::*;
pub use data_stores::*;
pub use hashmap_user_store::*;
pub use token_codec::TokenCodec;
