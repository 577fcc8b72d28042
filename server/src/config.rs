//! Host configuration: Leptos site options plus the `PORT` override.

use std::net::SocketAddr;

use leptos::prelude::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT {value:?}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `[workspace.metadata.leptos]` (or the `LEPTOS_*` variables that
    /// cargo-leptos exports) and apply `PORT`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the Leptos options cannot be loaded or `PORT`
    /// is not a valid port number.
    pub fn load() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let addr = SocketAddr::new(conf.leptos_options.site_addr.ip(), port);
        Ok(Self { leptos: conf.leptos_options, addr })
    }
}

/// `None` and blank values fall back to `DEFAULT_PORT`.
pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
        Ok(port) => Ok(port),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
