pub mod auth;
pub mod config;
pub mod consts;
pub mod telemetry;

pub use config::{ClientConfig, Config, ConfigError};
pub use consts::*;
