//! Bearer token claim decoding and expiry checks.
//!
//! Tokens are JWTs (`header.payload.signature`). The client only reads the
//! payload to learn `exp`; signatures are the API's business and are never
//! verified or produced here.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::clock::Clock;

/// Why a token could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token claims are invalid: {0}")]
    Claims(String),
}

/// Claims the client cares about.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    /// Expiry in Unix seconds.
    #[serde(deserialize_with = "deserialize_exp")]
    pub exp: i64,
    /// Subject (user id), when present.
    #[serde(default, alias = "id", alias = "userId")]
    pub sub: Option<String>,
}

impl TokenClaims {
    /// A token is expired once its expiry instant is at or before `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Decode the claims segment of `token`.
///
/// # Errors
///
/// Returns a `TokenError` when the token is not three dot-separated segments,
/// the payload is not base64url, or the payload lacks a numeric `exp`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Decode `token` and reject it if it has already expired.
///
/// Returns the expiry instant of a still-valid token.
///
/// # Errors
///
/// Returns `TokenError::Claims` for expired tokens, or any decode failure.
pub fn live_expiry(token: &str, clock: &impl Clock) -> Result<i64, TokenError> {
    let claims = decode_claims(token)?;
    if claims.is_expired_at(clock.now()) {
        return Err(TokenError::Claims(format!("token expired at {}", claims.exp)));
    }
    Ok(claims.exp)
}

fn deserialize_exp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected numeric exp"));
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        // Fractional seconds round down; a token is never treated as living longer.
        return Ok(float.floor() as i64);
    }
    Err(D::Error::custom("exp out of range"))
}
