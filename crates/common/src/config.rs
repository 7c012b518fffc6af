//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::{Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_TOKEN_STORAGE_PATH: &str = ".sysmedic/storage.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend API base URL, without trailing slash
    pub api_base_url: String,

    /// Key of the persisted bearer token
    pub token_storage_key: String,
    /// Location of the file-backed key-value store
    pub token_storage_path: PathBuf,

    /// Suggestion service provider (http, mock)
    pub suggestions_provider: String,
    /// Notification sink (console, tracing, mock)
    pub notifier: String,

    /// Runtime configuration
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            token_storage_path: PathBuf::from(DEFAULT_TOKEN_STORAGE_PATH),
            suggestions_provider: "http".to_string(),
            notifier: "console".to_string(),
            rust_log: "sysmedic=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Self::default();

        let api_base_url = env::var("API_BASE_URL").unwrap_or(defaults.api_base_url);

        let config = Self {
            api_base_url: normalize_base_url(&api_base_url)?,
            token_storage_key: env::var("TOKEN_STORAGE_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .unwrap_or(defaults.token_storage_key),
            token_storage_path: env::var("TOKEN_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.token_storage_path),
            suggestions_provider: env::var("SUGGESTIONS_PROVIDER")
                .unwrap_or(defaults.suggestions_provider),
            notifier: env::var("NOTIFIER").unwrap_or(defaults.notifier),
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        };

        tracing::debug!(
            api_base_url = %config.api_base_url,
            suggestions_provider = %config.suggestions_provider,
            "Configuration loaded"
        );

        Ok(config)
    }
}

/// Trim trailing slashes and reject anything that is not an http(s) URL
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Configuration(format!(
            "API_BASE_URL must start with http:// or https://, got '{}'",
            raw
        )));
    }

    Ok(trimmed.to_string())
}
