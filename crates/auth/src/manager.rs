//! Bearer token lifecycle over a persistent key-value store
//!
//! A stored token moves `Absent -> Present(valid) -> Present(expired) ->
//! Absent`. It leaves the store only through [`TokenManager::clear`] or the
//! expiry check in [`TokenManager::current_user`]. There is no refresh.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::jwt;
use crate::store::KeyValueStore;

/// Stores, reads and interprets the single persisted bearer token.
///
/// Storage failures never surface to callers: writes become no-ops and reads
/// become "no token", each logged at `warn`.
#[derive(Clone)]
pub struct TokenManager {
    store: Option<Arc<dyn KeyValueStore>>,
    config: AuthConfig,
}

impl std::fmt::Debug for TokenManager {
    #[mutants::skip] // Debug output only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("storage_key", &self.config.storage_key)
            .field("has_storage", &self.store.is_some())
            .finish()
    }
}

impl TokenManager {
    /// Manager over a shared store
    pub fn new(store: Arc<dyn KeyValueStore>, config: AuthConfig) -> Self {
        Self {
            store: Some(store),
            config,
        }
    }

    /// Manager over `store` with the default storage key
    pub fn with_store(store: impl KeyValueStore + 'static) -> Self {
        Self::new(Arc::new(store), AuthConfig::default())
    }

    /// Manager for environments with no persistent storage.
    /// Every write is dropped and every read finds nothing.
    pub fn without_storage() -> Self {
        Self {
            store: None,
            config: AuthConfig::default(),
        }
    }

    /// Manager over the page's local storage, or storage-less when the page
    /// has none
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: AuthConfig) -> Self {
        if crate::browser::BrowserStore::is_available() {
            Self::new(Arc::new(crate::browser::BrowserStore), config)
        } else {
            tracing::debug!("Local storage unavailable, token will not be persisted");
            Self {
                store: None,
                config,
            }
        }
    }

    pub fn has_storage(&self) -> bool {
        self.store.is_some()
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Persist `token`, replacing any previous one
    pub fn store(&self, token: &str) {
        let Some(store) = &self.store else {
            return;
        };

        match store.set(&self.config.storage_key, token) {
            Ok(()) => tracing::debug!(key = %self.config.storage_key, "Token stored"),
            Err(e) => tracing::warn!(error = %e, "Failed to store token"),
        }
    }

    /// The persisted token, if any. An empty value counts as no token.
    pub fn retrieve(&self) -> Option<String> {
        let store = self.store.as_ref()?;

        match store.get(&self.config.storage_key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read token");
                None
            }
        }
    }

    /// Forget the persisted token
    pub fn clear(&self) {
        let Some(store) = &self.store else {
            return;
        };

        match store.remove(&self.config.storage_key) {
            Ok(()) => tracing::debug!(key = %self.config.storage_key, "Token cleared"),
            Err(e) => tracing::warn!(error = %e, "Failed to clear token"),
        }
    }

    /// Whether a non-empty token is persisted. Expiry is not checked here;
    /// use [`TokenManager::current_user`] for that.
    pub fn is_authenticated(&self) -> bool {
        self.retrieve().is_some()
    }

    /// Claims of `token`, or `None` if it cannot be decoded
    pub fn decode(&self, token: &str) -> Option<Claims> {
        jwt::decode(token)
    }

    /// Whether `token` is expired, undecodable, or carries no `exp`
    pub fn is_expired(&self, token: &str) -> bool {
        jwt::is_expired(token)
    }

    /// Claims of the persisted token while it is unexpired.
    ///
    /// An expired token is cleared from storage as a side effect.
    pub fn current_user(&self) -> Option<Claims> {
        self.current_user_at(Utc::now())
    }

    /// [`TokenManager::current_user`] evaluated at `now`
    pub fn current_user_at(&self, now: DateTime<Utc>) -> Option<Claims> {
        let token = self.retrieve()?;

        if jwt::is_expired_at(&token, now) {
            tracing::info!("Stored token expired, clearing session");
            self.clear();
            return None;
        }

        jwt::decode(&token)
    }
}
