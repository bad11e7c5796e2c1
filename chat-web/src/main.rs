//! Browser Chat Widget - Leptos Frontend
//!
//! A single-page chat widget: one conversation, one backend route. The
//! backend answering the chat route is a separate service; this crate only
//! ships the browser side.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat widget starting...");

    // Hide the static loading screen now that the WASM bundle is running
    hide_loading_screen();

    // Mount the Leptos app
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => {
            log::warn!("No document available; cannot hide loading screen");
            return;
        }
    };

    if let Some(loading_element) = document.get_element_by_id("chat-loading") {
        if loading_element
            .set_attribute("style", "display: none;")
            .is_err()
        {
            log::warn!("Failed to hide loading screen");
        }
    }
}
