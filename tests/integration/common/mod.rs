//! Shared fixtures for integration tests
//!
//! Tokens are minted with a throwaway HMAC key. The client never verifies
//! signatures, so any key works.

#![allow(dead_code)]

use std::path::Path;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use sysmedic_common::Config;

const SIGNING_KEY: &[u8] = b"integration-test-signing-key";

/// Sign `claims` as an HS256 token
pub fn mint_token(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .expect("claims should serialize")
}

/// A token for a clinic doctor that expires in `valid_for`
pub fn doctor_token(valid_for: Duration) -> String {
    mint_token(json!({
        "sub": "7d3c2a10-8f4e-4b1a-9c55-0a9d2f1e6b42",
        "email": "dra.rojas@clinica.example",
        "role": "doctor",
        "companyId": "c0ffee00-0000-4000-8000-000000000001",
        "exp": (Utc::now() + valid_for).timestamp(),
    }))
}

/// Configuration pointing the token store into `dir`
pub fn test_config(dir: &Path, api_base_url: &str) -> Config {
    Config {
        api_base_url: api_base_url.to_string(),
        token_storage_path: dir.join("storage.json"),
        notifier: "mock".to_string(),
        ..Config::default()
    }
}
