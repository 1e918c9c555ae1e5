//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::web3::use_web3_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_web3_context();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="brand-accent">"Web3"</span><span class="brand-plain">"Connect"</span>
                    </span>
                </A>
                <div class="nav-links">
                    <A href="/status">"Status"</A>
                    <A href="/networks">"Networks"</A>
                    <A href="/about">"About"</A>
                </div>
                {move || {
                    ctx.provider_name().map(|name| view! {
                        <span class="nav-wallet">{name}</span>
                    })
                }}
            </div>
        </nav>
    }
}
