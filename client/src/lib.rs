//! # client
//!
//! Leptos + WASM frontend for Book Finder: a title search over the Open
//! Library catalog rendered as a responsive grid of cover cards.
//!
//! The search request is issued from the browser (`hydrate` feature). Under
//! `ssr` the same components render the initial HTML on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
