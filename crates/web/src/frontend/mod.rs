//! Leptos frontend for the browser build.

pub mod api;
pub mod app;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    rim_observability::init();

    // Mount the Leptos app to the body
    leptos::mount_to_body(app::App);
}
