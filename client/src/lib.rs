//! # client
//!
//! Leptos + WASM frontend for the medicine search site.
//!
//! This crate contains pages, components, page-owned state, URL/query
//! helpers, and the REST helper that loads result pages. The host crate
//! renders it on the server (`ssr`); the browser bundle hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
