//! # client
//!
//! Leptos + WASM front end for the news checker.
//!
//! The single page collects article text, posts it to `/api/check`, and
//! renders the returned verdict. Rendering rules live in the `verdict` crate;
//! this crate owns the UI state, event handlers, and browser glue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
