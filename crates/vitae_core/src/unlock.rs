//! Access gate for the identity section.
//!
//! # Responsibility
//! - Read the access token out of the page query string, once, at load.
//! - Compare its encoded form against the fixed unlock digest.
//!
//! # Invariants
//! - The gate is cosmetic: the digest is client-visible and trivially
//!   bypassable. It controls presentation, never security.
//! - Exactly one query parameter, named `access_token`, with a non-empty
//!   value, unlocks; every other query shape leaves the page locked.
//! - The raw token value is never logged.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::info;

/// Fixed name of the unlock query parameter.
pub const ACCESS_PARAM: &str = "access_token";

const UNLOCK_DIGEST: &str = "THVjYXNLdW50ejU3MDcwTWV0eg==";

/// Standard-alphabet base64 over the token's UTF-8 bytes.
pub fn encode_token(raw: &str) -> String {
    STANDARD.encode(raw.as_bytes())
}

/// Whether a raw token value matches the unlock digest.
pub fn is_unlock_token(raw: &str) -> bool {
    encode_token(raw) == UNLOCK_DIGEST
}

/// Evaluates the whole query string once at page assembly.
///
/// Accepts the string with or without its leading `?`.
pub fn unlock_from_query(query: &str) -> bool {
    let unlocked = matches!(
        single_query_param(query),
        Some((name, value)) if name == ACCESS_PARAM && !value.is_empty() && is_unlock_token(&value)
    );
    info!("event=unlock_check module=unlock status=ok unlocked={unlocked}");
    unlocked
}

/// The sole name/value pair of a one-parameter query string, decoded.
///
/// Returns `None` for zero parameters, more than one parameter, or a
/// component that does not percent-decode to valid UTF-8.
fn single_query_param(query: &str) -> Option<(String, String)> {
    let raw = query.strip_prefix('?').unwrap_or(query);
    let mut pairs = raw.split('&').filter(|pair| !pair.is_empty());
    let pair = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }

    let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
    Some((decode_component(name)?, decode_component(value)?))
}

fn decode_component(raw: &str) -> Option<String> {
    // Query-string tradition: `+` means space, before percent-decoding.
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .ok()
        .map(|decoded| decoded.into_owned())
}
