//! Hotel admin dashboard web client and asset server.
//!
//! This crate provides the Leptos interface: the session-loading gate,
//! the route guard wired to the browser router, the login view and the
//! authenticated shell. The `ssr` build serves the HTML shell and WASM
//! bundle; all session state lives in the hydrated client.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod logging;
pub mod pages;
pub mod session;
pub mod storage;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    logging::init_console_tracing();
    leptos::mount::hydrate_body(App);
}
