//! # client
//!
//! Leptos + WASM frontend for the BoardShare lending and events community.
//!
//! This crate contains pages, components, application state, client-side
//! form validation, and the REST service layer that talks to the backend
//! through the host's same-origin proxy.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
