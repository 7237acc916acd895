//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches Leptos SSR rendering of the client app under a single
//! Axum router. Leptos only registers the paths the client declares; every
//! other request reaches the fallback, which asks the client route table
//! where that path lands and answers with a redirect.

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::trace::TraceLayer;

/// Name used for the (unused) client asset bundle.
const OUTPUT_NAME: &str = "personal-finance";

/// SSR frontend: Leptos routes, health check and redirect fallback.
pub fn app(site_name: String) -> Router {
    let leptos_options = LeptosOptions::builder().output_name(OUTPUT_NAME).build();
    let routes = generate_route_list(client::app::App);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, move || client::app::shell(site_name.clone()))
        .fallback(redirect_unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// Redirect any path the client table sends elsewhere.
///
/// Non-canonical spellings of a page path such as `//` redirect to the
/// canonical path. A canonical page path should have been served by Leptos;
/// reaching here means it is not mounted, so answer 404.
async fn redirect_unmatched(uri: Uri) -> Response {
    let nav = client::routes::app_routes().navigate(uri.path());
    if nav.redirects == 0 && nav.path == uri.path() {
        tracing::warn!(path = %uri.path(), "route resolves to a page that is not mounted");
        return StatusCode::NOT_FOUND.into_response();
    }
    tracing::debug!(from = %uri.path(), to = %nav.path, "redirecting unmatched route");
    Redirect::temporary(&nav.path).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
