//! # client
//!
//! Leptos frontend for the parquet contractor landing page.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Apart from static content, the only interactive piece is the
//! contact form, whose submission flow lives in `state::contact` (form state
//! machine) and `net::contact` (the outbound request).

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
