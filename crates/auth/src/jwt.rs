//! JWT payload decoding and expiry helpers
//!
//! Only the payload segment is read. The signature is left to the backend.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::claims::Claims;
use crate::error::DecodeError;

/// Standard alphabet, padding optional, lenient about trailing bits.
/// Payload segments are base64url without padding; `-`/`_` are mapped back
/// to `+`/`/` before decoding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode the payload of a `header.payload.signature` token
pub fn try_decode(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount(segments.len()));
    }

    let payload = segments[1].replace('-', "+").replace('_', "/");
    let bytes = PAYLOAD_ENGINE.decode(payload.as_bytes())?;
    let json = String::from_utf8(bytes)?;

    match serde_json::from_str::<Value>(&json)? {
        Value::Object(map) => Ok(Claims::from(map)),
        _ => Err(DecodeError::NotAnObject),
    }
}

/// Decode the payload, logging and discarding any failure
pub fn decode(token: &str) -> Option<Claims> {
    match try_decode(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode token payload");
            None
        }
    }
}

/// Whether the token is expired at `now`.
///
/// Undecodable tokens and tokens without a numeric `exp` count as expired.
pub fn is_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    let Some(claims) = decode(token) else {
        return true;
    };

    match claims.exp() {
        Some(exp) => exp < now.timestamp_millis() as f64 / 1000.0,
        None => {
            tracing::debug!("Token has no exp claim, treating as expired");
            true
        }
    }
}

/// Whether the token is expired right now
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now())
}

/// `Authorization` header value for a bearer token
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}
