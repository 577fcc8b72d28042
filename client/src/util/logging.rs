//! Browser console logging.
//!
//! Routes the `log` facade to the devtools console and installs the panic
//! hook. Server builds log through `tracing` in `crm-server` instead, so this
//! is a no-op there.

use std::sync::Once;

static INIT: Once = Once::new();

/// Idempotent; only the first call installs anything.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "hydrate")]
        {
            console_error_panic_hook::set_once();
            if let Err(err) = console_log::init_with_level(level()) {
                web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
            }
        }
    });
}

#[cfg(feature = "hydrate")]
fn level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}
