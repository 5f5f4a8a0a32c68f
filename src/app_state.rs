use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::TokenCodec;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type TokenCodecType = Arc<TokenCodec>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub token_codec: TokenCodecType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(user_store: UserStoreType, config: ConfigType) -> Self {
        let token_codec = Arc::new(TokenCodec::from_config(&config));
        Self {
            user_store,
            token_codec,
            config,
        }
    }
}
