//! Browser page for sending native TEA on Tea Sepolia
//!
//! All wallet and transfer logic lives in `lib-core`; this crate binds it to
//! `window.ethereum` and renders it with Leptos.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());

    let config = lib_core::Config::from_build_env();
    log::info!(
        "Tea transfer page starting on {} (chain {}, rpc {})",
        config.chain_name,
        config.chain_id,
        config.rpc_url
    );
    if let Err(err) = lib_core::init_config(config) {
        log::error!("Invalid build configuration, using defaults: {}", err);
        if let Err(err) = lib_core::init_config(lib_core::Config::default()) {
            log::error!("Default configuration rejected: {}", err);
        }
    }

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the `leptos-loading` placeholder from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available, loading screen left in place");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                html_element.class_list().add_1("hidden").ok();
            }
            element.set_attribute("style", "display: none !important;").ok();
        }
        None => log::warn!("Loading element not found"),
    }
}
