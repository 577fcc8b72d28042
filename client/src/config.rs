//! Build-time client configuration.
//!
//! The API base URL is baked in when the crate is compiled (`CRM_API_URL`);
//! there is no runtime override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// How long a toast notification stays visible.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// Resolved API base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CRM_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
