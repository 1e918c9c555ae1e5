//! Web3 Connect - browser wallet connection portal
//!
//! Leptos CSR app that discovers EIP-6963 wallets and binds one of them to a
//! shared RPC client for the whole page.

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
    // Panic messages land in the browser console instead of an opaque abort
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Web3 Connect starting");

    // Hide the loading screen as soon as the wasm module is running
    app::hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
