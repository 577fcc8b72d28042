//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos app and serves its compiled assets. All
//! CRM data lives behind the external REST API that the browser calls
//! directly, so there are no API routes here.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use crm_client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// SSR routes for every client page, `/pkg` assets, and `/healthz`.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
