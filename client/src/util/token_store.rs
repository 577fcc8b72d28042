//! Persistent storage for the single bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session manager is the only writer. Stores do no validation; they only
//! remember one string across page reloads until it is cleared.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Storage contract for the bearer token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// `localStorage`-backed store. Every call is a no-op outside the browser.
#[derive(Clone, Copy, Debug)]
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new(crate::config::TOKEN_STORAGE_KEY)
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = Self::storage()?.get_item(self.key).ok().flatten()?;
            if raw.trim().is_empty() { None } else { Some(raw) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if storage.set_item(self.key, token).is_err() {
                log::warn!("failed to persist token under {}", self.key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.remove_item(self.key).is_err() {
                    log::warn!("failed to remove token under {}", self.key);
                }
            }
        }
    }
}

/// In-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
