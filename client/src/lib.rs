//! # client
//!
//! Leptos + WASM frontend for the Keylo wallet and trading dashboard.
//!
//! Pages talk to the remote wallet backend over REST (`net::api`), share the
//! auth session through a context signal (`state::auth`), and render every
//! data view through the same loading/error/empty/populated contract
//! (`state::query`). The `hydrate` feature builds the browser bundle; the
//! `ssr` feature lets the `server` crate render the shell.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
