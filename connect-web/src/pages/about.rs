//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card" style="width: 100%; max-width: 640px;">
                <h1 class="card-title">"About Web3 Connect"</h1>

                <p class="about-text">
                    "Web3 Connect is a wallet connection portal for EVM chains. It discovers
                    every wallet extension installed in your browser through the EIP-6963
                    announcement standard, so no wallet fights another for the page."
                </p>

                <h2 class="section-title">"How it works"</h2>
                <ul class="about-list">
                    <li>"Installed wallets announce themselves; the portal lists all of them."</li>
                    <li>"Selecting a wallet binds it to a single shared RPC client used across the app."</li>
                    <li>"Your choice is remembered and restored automatically on the next visit."</li>
                    <li>"Network switching and registration go through the wallet's own RPC methods."</li>
                </ul>

                <p class="about-text">
                    "Built in Rust with the Leptos framework and compiled to WebAssembly."
                </p>
            </div>
        </div>
    }
}
