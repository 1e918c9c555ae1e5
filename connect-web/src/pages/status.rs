//! Wallet Status Page - show the active wallet session

use leptos::prelude::*;

use crate::services::accounts::session_summary;
use crate::state::web3::use_web3_context;
use crate::utils::format::{chain_label, truncate_address};

#[component]
pub fn StatusPage() -> impl IntoView {
    let ctx = use_web3_context();

    let (accounts, set_accounts) = signal(Vec::<String>::new());
    let (chain, set_chain) = signal(None::<u64>);
    let (error, set_error) = signal(None::<String>);

    // Refresh whenever the selection changes (including the restore on load)
    Effect::new(move || {
        if ctx.current_provider().is_none() {
            return;
        }
        leptos::task::spawn_local(async move {
            match session_summary(&ctx.web3()).await {
                Ok(summary) => {
                    set_accounts.set(summary.accounts);
                    set_chain.set(Some(summary.chain_id));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    view! {
        <div class="page-center">
            <div class="card" style="width: 100%; max-width: 500px;">
                <h1 class="card-title">"Wallet Status"</h1>

                {move || {
                    let Some(detail) = ctx.current_provider() else {
                        return view! {
                            <div>
                                <p class="hint">"No wallet connected"</p>
                                <a href="/" class="btn btn-block">"Connect Wallet"</a>
                            </div>
                        }.into_any();
                    };

                    view! {
                        <div>
                            <div class="status-block">
                                <p class="field-label">"Wallet"</p>
                                <p class="field-value">
                                    <img src=detail.info.icon.clone() alt="" class="wallet-icon-small"/>
                                    {detail.info.name.clone()}
                                </p>

                                <p class="field-label">"Identifier"</p>
                                <p class="field-value mono">{detail.info.rdns.clone()}</p>

                                <p class="field-label">"Network"</p>
                                <p class="field-value">
                                    {move || chain.get()
                                        .map(chain_label)
                                        .unwrap_or_else(|| "loading...".to_string())}
                                </p>

                                <p class="field-label">"Accounts"</p>
                                {move || {
                                    let list = accounts.get();
                                    if list.is_empty() {
                                        view! {
                                            <p class="hint">"No accounts exposed to this page yet."</p>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <div>
                                                {list.into_iter().map(|account| view! {
                                                    <p class="field-value mono" title=account.clone()>
                                                        {truncate_address(&account)}
                                                    </p>
                                                }).collect::<Vec<_>>()}
                                            </div>
                                        }.into_any()
                                    }
                                }}
                            </div>

                            {move || error.get().map(|err| view! {
                                <div class="error">
                                    <p>{err}</p>
                                </div>
                            })}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
