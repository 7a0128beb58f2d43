//! Per-session anti-forgery tokens.
//!
//! One random token per session, minted lazily on first use and never
//! rotated by validation (tokens are session-lifetime, not single-use).
//! State-changing requests must echo the token back; comparison is
//! constant-time in the token content.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use thiserror::Error;

use crate::session::SessionData;

/// Bytes of randomness behind each token (URL-safe base64 encoded).
pub const TOKEN_BYTES: usize = 32;

/// CSRF validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsrfError {
    /// Missing stored token, missing provided token, or mismatch.
    /// Always surfaced as a rejected request.
    #[error("invalid CSRF token")]
    InvalidToken,
}

/// Return the session's CSRF token, minting and storing one if absent.
pub fn issue(session: &mut SessionData) -> String {
    if let Some(token) = session.csrf_token.as_deref() {
        if !token.is_empty() {
            return token.to_string();
        }
    }

    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    let token = URL_SAFE_NO_PAD.encode(bytes);
    session.csrf_token = Some(token.clone());
    token
}

/// Validate a provided token against the session's stored token.
///
/// Never mutates the stored token.
///
/// # Errors
///
/// Returns [`CsrfError::InvalidToken`] when no token is stored, none was
/// provided, or the two differ.
pub fn validate(session: &SessionData, provided: Option<&str>) -> Result<(), CsrfError> {
    let expected = session
        .csrf_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .ok_or(CsrfError::InvalidToken)?;
    let provided = provided
        .filter(|token| !token.is_empty())
        .ok_or(CsrfError::InvalidToken)?;

    if constant_time_compare(expected, provided) {
        Ok(())
    } else {
        Err(CsrfError::InvalidToken)
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
