//! # client
//!
//! Leptos + WASM frontend for the Mediqlo super admin console.
//!
//! This crate contains the login and dashboard pages, the hospital table
//! components, session/roster state wrappers, and the REST calls to the
//! external hospital-management backend. Wire types and the pure console
//! flow live in the `tenants` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
