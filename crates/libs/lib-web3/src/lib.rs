//! # EVM Wallet Client Library
//!
//! Browser-side client for EVM wallets: EIP-6963 provider discovery, EIP-1193
//! request dispatch, and the `wallet_*` RPC surface (chain switching, asset
//! watching, permissions).
//!
//! ## Structure
//!
//! - **[`discovery`]**: EIP-6963 announce/request event wiring and provider
//!   descriptors
//! - **[`provider`]**: [`Eip1193Provider`], the handle around an injected
//!   wallet's connection object
//! - **[`rpc`]**: [`Web3`], the shared client bound to at most one provider
//! - **[`wallet_rpc`]**: [`WalletRpcApi`], the wallet-specific RPC methods
//! - **[`error`]**: [`Web3Error`]

pub mod discovery;
pub mod error;
pub mod provider;
pub mod rpc;
pub mod wallet_rpc;

// Re-export commonly used types from root for convenience
pub use discovery::{find_by_rdns, watch_providers, ProviderDetail, ProviderInfo};
pub use error::Web3Error;
pub use provider::Eip1193Provider;
pub use rpc::{format_quantity, parse_quantity, Web3};
pub use wallet_rpc::{AddChainParams, NativeCurrency, WalletRpcApi, WatchAssetParams};
