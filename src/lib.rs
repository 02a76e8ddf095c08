//! Tudo no Molde F1 - course landing page
//!
//! A server-rendered sales page built with Leptos and WebAssembly. Content
//! blocks fade in as they scroll into view and the module timeline fills up
//! with scroll progress.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
