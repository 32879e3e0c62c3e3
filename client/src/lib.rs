//! # client
//!
//! Leptos frontend for the portfolio page: the intro header, work history,
//! project gallery, and contact regions, plus the side navigation and theme
//! toggle that react to scrolling and the system color scheme.
//!
//! The crate builds twice: with `ssr` for the axum host's server render, and
//! with `hydrate` as the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
