//! `window.localStorage` backed store (wasm32 only)

use wasm_bindgen::JsValue;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Key-value store over the page origin's local storage.
///
/// Storage is looked up on every call; outside a window context, or when the
/// browser denies access, every operation fails with
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    /// Whether local storage is reachable from the current context
    pub fn is_available() -> bool {
        local_storage().is_some()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn browser_error(e: JsValue) -> StorageError {
    StorageError::Browser(format!("{:?}", e))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(browser_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(browser_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.remove_item(key).map_err(browser_error)
    }
}
