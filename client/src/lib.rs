//! # portfolio-client
//!
//! Leptos + WASM frontend for the single-page developer portfolio.
//!
//! This crate contains the page composition, the section components, the
//! static content tables they render, local UI state (contact form, toast
//! queue, visibility latches), and the HTTP transport used by the contact
//! form. The `portfolio` server renders it with SSR and the browser
//! hydrates it through the `hydrate` entry point below.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
