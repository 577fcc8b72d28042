//! Typed failures for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! The client never retries and never logs the user out on its own; callers
//! turn these into notifications or session transitions.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only wired in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, lifting `{"message": ...}` out of the body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message.trim().to_owned())
            .into_iter()
            .find(|m| !m.is_empty());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, or `fallback` when there is none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
