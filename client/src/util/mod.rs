//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, time,
//! console) and pure decision logic (guard, validation) from page and
//! component code to improve reuse and testability.

pub mod clock;
pub mod guard;
pub mod logging;
pub mod token;
pub mod token_store;
pub mod validate;
