//! Networks Page - switch the wallet between known chains
//!
//! Uses the wallet RPC surface on the shared client: switch first, and when
//! the wallet does not know the chain (code 4902), register it and retry.

use leptos::prelude::*;
use lib_web3::WalletRpcApi;

use crate::state::web3::use_web3_context;
use crate::utils::constants::{KnownChain, KNOWN_CHAINS};
use crate::utils::format::chain_label;

#[component]
pub fn NetworksPage() -> impl IntoView {
    let ctx = use_web3_context();

    let (active_chain, set_active_chain) = signal(None::<u64>);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Read the wallet's current chain once a selection exists
    Effect::new(move || {
        if ctx.current_provider().is_none() {
            return;
        }
        leptos::task::spawn_local(async move {
            match ctx.web3().chain_id().await {
                Ok(id) => set_active_chain.set(Some(id)),
                Err(e) => log::warn!("failed to read chain id: {e}"),
            }
        });
    });

    let switch_to = move |chain: &'static KnownChain| {
        set_busy.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            let web3 = ctx.web3();
            let result = match web3.switch_chain(chain.id).await {
                Err(e) if e.is_unrecognized_chain() => {
                    log::info!("wallet does not know {}, registering it", chain.name);
                    match web3.add_chain(&chain.add_params()).await {
                        Ok(()) => web3.switch_chain(chain.id).await,
                        Err(e) => Err(e),
                    }
                }
                other => other,
            };

            match result {
                Ok(()) => {
                    log::info!("switched to {}", chain.name);
                    set_active_chain.set(Some(chain.id));
                }
                Err(e) => set_error.set(Some(format!("could not switch to {}: {e}", chain.name))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="page-center">
            <div class="card" style="width: 100%; max-width: 500px;">
                <h1 class="card-title">"Networks"</h1>

                {move || if ctx.is_connected() {
                    view! {
                        <div>
                            <p class="subtitle">
                                {move || active_chain.get()
                                    .map(|id| format!("Active: {}", chain_label(id)))
                                    .unwrap_or_else(|| "Reading active network...".to_string())}
                            </p>

                            {move || error.get().map(|err| view! {
                                <div class="error">
                                    <p>{err}</p>
                                </div>
                            })}

                            <div class="wallet-options">
                                {KNOWN_CHAINS.iter().map(|chain| {
                                    let is_active = move || active_chain.get() == Some(chain.id);
                                    view! {
                                        <button
                                            class="wallet-button"
                                            class:active=is_active
                                            disabled=move || busy.get() || is_active()
                                            on:click=move |_| switch_to(chain)
                                        >
                                            <span class="wallet-name">{chain.name}</span>
                                            <span class="chain-currency">{chain.currency_symbol}</span>
                                        </button>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div>
                            <p class="hint">"Connect a wallet before switching networks."</p>
                            <a href="/" class="btn btn-block">"Connect Wallet"</a>
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
