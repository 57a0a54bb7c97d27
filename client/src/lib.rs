//! # client
//!
//! Leptos + WASM console for the reading-group attendance tracker.
//!
//! The admin console and the participant self-service screens share one
//! bundle. Everything that decides who is signed in lives in `session`;
//! `net` is the single way out to the REST service; `pages` and `components`
//! only read the reactive session snapshot provided by `state::session`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
