//! # movizio-web
//!
//! Leptos + WASM frontend for the Movizio movie-browsing site.
//!
//! This crate contains the route table, the navigation guard, the session
//! token holder, and the HTTP client that talks to the Movizio API. Pages and
//! components are thin presentation over those pieces.
//!
//! The navigation guard is a UX convenience only. It reads a client-side
//! token and is trivially bypassable; access control lives on the API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and logger, then mounts
/// [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
