//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON search endpoint with Leptos SSR rendering
//! under a single Axum router. The WASM bundle is served from `/pkg` and the
//! shape/colour images from `/static`. Medicine detail pages live on the
//! search backend; `/medicine/{id}` redirects there.

pub mod search;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;
use crate::state::AppState;

/// API routes consumed by the hydrated result page.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(search::search))
        .route("/medicine/{id}", get(redirect_medicine_detail))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn redirect_medicine_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, HostError> {
    let base = state
        .config
        .search_backend_url
        .as_deref()
        .ok_or(HostError::BackendNotConfigured)?;
    Ok(Redirect::temporary(&backend_detail_url(base, &id)))
}

fn backend_detail_url(base: &str, id: &str) -> String {
    format!("{base}/medicine/{}", urlencoding::encode(id.trim()))
}

/// Full host router: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let static_dir = state.config.static_dir.clone();

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
