//! Shared Web3 context
//!
//! Exposes one [`Web3`] client, the set of wallets discovered via EIP-6963,
//! and the currently selected wallet to the whole component tree. Selecting
//! a wallet binds the shared client to its connection handle and persists
//! the wallet's rdns, so the choice survives page reloads.

use leptos::prelude::*;
use lib_web3::{find_by_rdns, watch_providers, ProviderDetail, Web3};

use crate::utils::constants::PROVIDER_STORAGE_KEY;
use crate::utils::storage;

/// Global wallet-connection context.
///
/// The signals live in local (single-threaded) storage because provider
/// details hold JavaScript handles.
#[derive(Clone, Copy)]
pub struct Web3Context {
    web3: StoredValue<Web3, LocalStorage>,
    providers: RwSignal<Vec<ProviderDetail>, LocalStorage>,
    current_provider: RwSignal<Option<ProviderDetail>, LocalStorage>,
}

impl Web3Context {
    /// The shared client. All callers get handles onto the same instance.
    pub fn web3(&self) -> Web3 {
        self.web3.get_value()
    }

    /// Wallets that have announced themselves, in announcement order.
    pub fn providers(&self) -> Vec<ProviderDetail> {
        self.providers.get()
    }

    pub fn current_provider(&self) -> Option<ProviderDetail> {
        self.current_provider.get()
    }

    pub fn is_connected(&self) -> bool {
        self.current_provider.with(|current| current.is_some())
    }

    pub fn provider_name(&self) -> Option<String> {
        self.current_provider
            .with(|current| current.as_ref().map(|detail| detail.info.name.clone()))
    }

    pub fn current_rdns(&self) -> Option<String> {
        self.current_provider
            .with(|current| current.as_ref().map(|detail| detail.info.rdns.clone()))
    }

    /// Select a wallet: bind the shared client to its connection handle,
    /// persist its rdns, then update the selection signal.
    ///
    /// After this returns, the client's bound handle is the selection's
    /// handle. Nothing in this path ever clears the selection.
    pub fn set_current_provider(&self, detail: &ProviderDetail) {
        self.web3
            .with_value(|web3| web3.set_provider(detail.provider.clone()));
        storage::set_item(PROVIDER_STORAGE_KEY, &detail.info.rdns);
        self.current_provider.set(Some(detail.clone()));
    }

    fn record_announcement(&self, detail: ProviderDetail) {
        // Wallets re-announce on every request event; keep one entry per uuid
        self.providers.update(|list| {
            if !list.contains(&detail) {
                list.push(detail);
            }
        });
    }
}

/// Create the context, start discovery, and register the restore effect.
/// Called once from the application root.
pub fn provide_web3_context() -> Web3Context {
    let context = Web3Context {
        web3: StoredValue::new_local(Web3::new()),
        providers: RwSignal::new_local(Vec::new()),
        current_provider: RwSignal::new_local(None),
    };

    let ctx = context;
    if let Err(e) = watch_providers(move |detail| ctx.record_announcement(detail)) {
        log::warn!("wallet discovery unavailable: {e}");
    }

    // Re-apply the persisted selection once the matching wallet announces
    // itself. Runs after render and again whenever discovery results change;
    // the selection-already-set check makes it apply at most once.
    Effect::new(move || {
        let providers = ctx.providers.get();
        if ctx.current_provider.with(|current| current.is_some()) {
            return;
        }
        let Some(cached) = storage::get_item(PROVIDER_STORAGE_KEY) else {
            return;
        };
        if let Some(detail) = find_by_rdns(&providers, &cached) {
            log::info!("restoring persisted wallet selection: {cached}");
            ctx.set_current_provider(detail);
        }
    });

    provide_context(context);
    context
}

pub fn use_web3_context() -> Web3Context {
    expect_context::<Web3Context>()
}
