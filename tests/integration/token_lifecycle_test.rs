//! Token persistence and session lifecycle across process restarts

mod common;

use chrono::Duration;
use sysmedic_app::cli::Command;
use sysmedic_app::commands::execute;
use sysmedic_app::create_app;
use sysmedic_auth::{decode, is_expired};

use crate::common::{doctor_token, test_config};

#[test_log::test]
fn test_token_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), "http://localhost:3000/api");
    let token = doctor_token(Duration::hours(8));

    let first = create_app(&config).unwrap();
    assert!(!first.tokens.is_authenticated());
    first.tokens.store(&token);

    // A fresh app over the same file sees the same session
    let second = create_app(&config).unwrap();
    assert_eq!(second.tokens.retrieve(), Some(token.clone()));

    let user = second.tokens.current_user().unwrap();
    assert_eq!(user.email(), Some("dra.rojas@clinica.example"));
    assert_eq!(user.role(), Some("doctor"));
    assert_eq!(
        user.company_id(),
        Some("c0ffee00-0000-4000-8000-000000000001")
    );

    second.tokens.clear();
    let third = create_app(&config).unwrap();
    assert_eq!(third.tokens.retrieve(), None);
}

#[test_log::test]
fn test_expired_session_is_cleared_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), "http://localhost:3000/api");
    let token = doctor_token(Duration::hours(-1));

    let app = create_app(&config).unwrap();
    app.tokens.store(&token);

    // Presence only, expiry is not consulted
    assert!(app.tokens.is_authenticated());
    assert!(app.tokens.current_user().is_none());

    let reopened = create_app(&config).unwrap();
    assert!(!reopened.tokens.is_authenticated());

    let contents = std::fs::read_to_string(dir.path().join("storage.json")).unwrap();
    assert!(!contents.contains(&token));
}

#[test]
fn test_signed_tokens_decode_without_verification() {
    let token = doctor_token(Duration::minutes(5));

    let claims = decode(&token).unwrap();
    assert_eq!(claims.sub(), Some("7d3c2a10-8f4e-4b1a-9c55-0a9d2f1e6b42"));
    assert!(!is_expired(&token));

    // Tampering with the signature changes nothing client-side
    let (head, _) = token.rsplit_once('.').unwrap();
    let tampered = format!("{}.forged", head);
    assert_eq!(decode(&tampered), Some(claims));
}

#[test_log::test(tokio::test)]
async fn test_corrupt_storage_file_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{not json").unwrap();

    let app = create_app(&test_config(dir.path(), "http://localhost:3000/api")).unwrap();
    assert!(!app.tokens.is_authenticated());
    assert!(app.tokens.current_user().is_none());

    let token = doctor_token(Duration::hours(1));
    let mut out = Vec::new();
    let err = execute(&app, Command::Login { token }, &mut out)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Token could not be persisted");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}
