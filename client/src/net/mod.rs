//! Networking modules for the CRM REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls with token injection, `error` classifies their
//! failures, and `types` defines the JSON schema.

pub mod api;
pub mod error;
pub mod types;
