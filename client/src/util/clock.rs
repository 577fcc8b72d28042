//! Wall-clock sources for token expiry checks.
//!
//! Session code never reads time directly; it asks a `Clock` so tests can pin
//! or advance time deterministically.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time in Unix seconds.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Real time: `Date.now()` in the browser, `SystemTime` elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
            secs
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        }
    }
}

/// Manually driven clock. Clones share the same instant.
#[derive(Clone, Debug, Default)]
pub struct FixedClock {
    now: Arc<AtomicI64>,
}

impl FixedClock {
    pub fn at(now: i64) -> Self {
        Self { now: Arc::new(AtomicI64::new(now)) }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
