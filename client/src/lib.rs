//! # web-console
//!
//! Leptos + WASM frontend for browsing deployment history by commit.
//!
//! Each deployment trace renders as a collapsible row with commit metadata,
//! an optional commit-message panel, and the deployments the commit
//! triggered. Response shapes and display rules come from the `traces` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("web-console: console logger unavailable: {e}");
    }
    log::info!("web-console hydrating");
    leptos::mount::hydrate_body(app::App);
}
