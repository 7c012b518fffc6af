//! SYSMEDIC client composition root
//!
//! Wires the token store, suggestions service and notifier from
//! configuration, and implements the command-line front end on top of them.

pub mod cli;
pub mod commands;

use std::sync::Arc;

use sysmedic_auth::{AuthConfig, FileStore, TokenManager};
use sysmedic_common::Config;
use sysmedic_notify::{Notifier, NotifierFactory};
use sysmedic_suggestions::{SuggestionConfig, SuggestionService, SuggestionServiceFactory};

/// Services shared by every command
#[derive(Clone)]
pub struct App {
    pub tokens: TokenManager,
    pub suggestions: Arc<dyn SuggestionService>,
    pub notifier: Arc<dyn Notifier>,
}

/// Build the application services from configuration
pub fn create_app(config: &Config) -> Result<App, anyhow::Error> {
    let store = FileStore::new(&config.token_storage_path);
    tracing::debug!(path = %store.path().display(), "Using file token store");

    let tokens = TokenManager::new(Arc::new(store), AuthConfig::from(config));

    let suggestions =
        SuggestionServiceFactory::create(SuggestionConfig::from(config), tokens.clone())?;
    let notifier = NotifierFactory::create(&config.notifier)?;

    Ok(App {
        tokens,
        suggestions: Arc::from(suggestions),
        notifier: Arc::from(notifier),
    })
}
