//! Bearer token lifecycle for the SYSMEDIC client
//!
//! Persists a single bearer token in an injected key-value store and derives
//! authentication state from it: payload decoding, expiry checks and the
//! current user's claims. Signatures are never verified here; the backend
//! does that on every request.

#[cfg(target_arch = "wasm32")]
mod browser;
mod claims;
mod config;
mod error;
mod file;
mod jwt;
mod manager;
mod store;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
pub use claims::Claims;
pub use config::AuthConfig;
pub use error::{DecodeError, StorageError};
pub use file::FileStore;
pub use jwt::{bearer_header, decode, is_expired, is_expired_at, try_decode};
pub use manager::TokenManager;
pub use store::{KeyValueStore, MemoryStore};
