//! Token storage configuration

use sysmedic_common::config::{Config, DEFAULT_TOKEN_STORAGE_KEY};

/// Token storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Key under which the bearer token is persisted
    pub storage_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            storage_key: config.token_storage_key.clone(),
        }
    }
}
