//! ToyTopia web client.
//!
//! ARCHITECTURE
//! ============
//! - `app`: shell and route table
//! - `auth`: identity provider adapter, session feed, and UI context
//! - `components` / `pages`: Leptos views
//! - `net`: catalog fetch and wire types
//! - `state`: browser-independent rules (guard, detail lookup, forms)
//! - `util`: navigation intent, storage, and notices
//!
//! Built twice: with `hydrate` as the WASM bundle and with `ssr` as a library
//! linked into the server for rendering.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
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
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
