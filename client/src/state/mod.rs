//! Application state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `session` own the identity of the current user; the remaining
//! modules hold per-view list and form state that pages wrap in `RwSignal`s.

pub mod auth;
pub mod dashboard;
pub mod leads;
pub mod managers;
pub mod notifications;
pub mod session;
pub mod ui;
