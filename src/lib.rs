#![recursion_limit = "256"]
//! # costasuite
//!
//! Leptos + WASM frontend for the CostaSuite coastal real-estate platform:
//! the public catalog plus the role-gated agent/admin dashboard. All data
//! access goes through the external listings REST API; this crate holds
//! pages, components, client state (session, notifications), the API
//! client layer, and form validation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod validate;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
