//! Fuel Wallet Web Helper
//!
//! Leptos front-end that connects to the injected Fuel wallet and looks up blocks
//! on the chain the wallet is on.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod hooks;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Library crates log through tracing's `log` bridge, so this covers them too
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Fuel wallet helper starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
