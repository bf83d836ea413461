//! # portfolio
//!
//! Leptos + WASM frontend for the single-page portfolio site.
//!
//! This crate contains the page, section components, the theme controller,
//! the contact form state machine, the email relay client, and the static
//! content tables the sections render. The `server` crate renders it over SSR;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
