//! # crm-client
//!
//! Leptos + WASM front end for the lead-management CRM. Employers manage
//! their managers and leads; managers work the leads assigned to them.
//!
//! This crate holds the session model (token store, session manager, route
//! guard), the REST client, and the role-specific pages. The `crm-server`
//! binary renders it with the `ssr` feature; the browser bundle is built with
//! `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
