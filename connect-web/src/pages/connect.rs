//! Connect Wallet Page - pick one of the discovered wallets

use leptos::prelude::*;
use lib_web3::ProviderDetail;

use crate::services::accounts::request_connection;
use crate::state::web3::use_web3_context;
use crate::utils::format::truncate_address;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let ctx = use_web3_context();

    let (error, set_error) = signal(None::<String>);
    let (connecting, set_connecting) = signal(false);
    let (accounts, set_accounts) = signal(Vec::<String>::new());

    let select_wallet = move |detail: ProviderDetail| {
        set_connecting.set(true);
        set_error.set(None);

        // Selection first: bind the shared client and persist the choice,
        // whether or not the account prompt below succeeds
        ctx.set_current_provider(&detail);

        leptos::task::spawn_local(async move {
            match request_connection(&ctx.web3()).await {
                Ok(summary) => {
                    log::info!(
                        "{} connected with {} account(s)",
                        detail.info.name,
                        summary.accounts.len()
                    );
                    set_accounts.set(summary.accounts);
                }
                Err(e) => {
                    log::warn!("connection to {} failed: {e}", detail.info.rdns);
                    set_error.set(Some(e));
                }
            }
            set_connecting.set(false);
        });
    };

    view! {
        <div class="page-center">
            <div class="card" style="width: 100%; max-width: 460px;">
                <h1 class="card-title">"Connect Wallet"</h1>
                <p class="subtitle">
                    {move || if ctx.is_connected() {
                        format!("Connected via {}", ctx.provider_name().unwrap_or_default())
                    } else {
                        "Select a wallet to connect".to_string()
                    }}
                </p>

                {move || error.get().map(|err| view! {
                    <div class="error">
                        <p>{err}</p>
                    </div>
                })}

                {move || if ctx.is_connected() {
                    let account_list = accounts.get();
                    view! {
                        <div>
                            <div class="success">
                                <p class="success-heading">"Wallet Connected"</p>
                                {if account_list.is_empty() {
                                    view! {
                                        <p class="hint">
                                            "Selection restored. Accounts appear once the wallet grants access."
                                        </p>
                                    }.into_any()
                                } else {
                                    view! {
                                        <div>
                                            {account_list.into_iter().map(|account| view! {
                                                <div class="wallet-address">{truncate_address(&account)}</div>
                                            }).collect::<Vec<_>>()}
                                        </div>
                                    }.into_any()
                                }}
                            </div>
                            <a href="/status" class="btn btn-block">"View Status"</a>
                        </div>
                    }.into_any()
                } else {
                    let wallets = ctx.providers();
                    if wallets.is_empty() {
                        view! {
                            <div class="info">
                                <p>"No browser wallets found."</p>
                                <p class="hint">
                                    "Install a wallet extension that supports EIP-6963 discovery, then reload this page."
                                </p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="wallet-options">
                                {wallets.into_iter().map(|detail| {
                                    let uuid = detail.info.uuid.clone();
                                    let name = detail.info.name.clone();
                                    let icon = detail.info.icon.clone();
                                    view! {
                                        <button
                                            class="wallet-button"
                                            disabled=move || connecting.get()
                                            on:click=move |_| {
                                                // Look the detail up at click time; handles stay
                                                // out of the rendered view
                                                let picked = ctx
                                                    .providers()
                                                    .into_iter()
                                                    .find(|d| d.info.uuid == uuid);
                                                if let Some(detail) = picked {
                                                    select_wallet(detail);
                                                }
                                            }
                                        >
                                            <img src=icon alt=name.clone() class="wallet-icon"/>
                                            <span class="wallet-name">{name.clone()}</span>
                                            <span class="wallet-arrow">"→"</span>
                                        </button>
                                    }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
