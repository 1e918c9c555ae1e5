//! # Wallet RPC Extension
//!
//! The `wallet_*` JSON-RPC methods wallets expose beyond the standard eth_
//! namespace: chain switching and registration, asset watching, and the
//! permissions system. Implemented as an extension trait on [`Web3`] so the
//! methods ride on the one shared client; bring [`WalletRpcApi`] into scope
//! to use them.
//!
//! Wire shapes follow the wallet JSON-RPC conventions: camelCase member
//! names and 0x-hex chain ids.

use serde::{Deserialize, Serialize};

use crate::error::Web3Error;
use crate::rpc::{format_quantity, Web3};

/// Native currency descriptor for `wallet_addEthereumChain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Parameters for `wallet_addEthereumChain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    /// 0x-hex chain id.
    pub chain_id: String,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_currency: Option<NativeCurrency>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub block_explorer_urls: Vec<String>,
}

impl AddChainParams {
    pub fn new(chain_id: u64, chain_name: impl Into<String>, rpc_urls: Vec<String>) -> Self {
        Self {
            chain_id: format_quantity(chain_id),
            chain_name: chain_name.into(),
            rpc_urls,
            native_currency: None,
            block_explorer_urls: Vec::new(),
        }
    }

    pub fn with_native_currency(mut self, currency: NativeCurrency) -> Self {
        self.native_currency = Some(currency);
        self
    }

    pub fn with_block_explorer(mut self, url: impl Into<String>) -> Self {
        self.block_explorer_urls.push(url.into());
        self
    }
}

/// Parameters for `wallet_watchAsset`. Only ERC-20 assets are expressible;
/// that is the only asset type the method standardizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchAssetParams {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub options: WatchAssetOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchAssetOptions {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl WatchAssetParams {
    pub fn erc20(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            asset_type: "ERC20".to_string(),
            options: WatchAssetOptions {
                address: address.into(),
                symbol: symbol.into(),
                decimals,
                image: None,
            },
        }
    }
}

/// One entry of a `wallet_getPermissions` / `wallet_requestPermissions`
/// response. Wallets attach more fields; only the capability name is stable
/// across implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub parent_capability: String,
    #[serde(default)]
    pub invoker: Option<String>,
}

/// Wallet-specific RPC methods, available on the shared [`Web3`] client.
// Single-threaded wasm target; the futures never need Send.
#[allow(async_fn_in_trait)]
pub trait WalletRpcApi {
    /// `wallet_switchEthereumChain`. Fails with code 4902 (see
    /// [`Web3Error::is_unrecognized_chain`]) when the wallet does not know
    /// the chain.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), Web3Error>;

    /// `wallet_addEthereumChain`.
    async fn add_chain(&self, params: &AddChainParams) -> Result<(), Web3Error>;

    /// `wallet_watchAsset`. Resolves to whether the asset was added.
    async fn watch_asset(&self, params: &WatchAssetParams) -> Result<bool, Web3Error>;

    /// `wallet_requestPermissions` for `eth_accounts`.
    async fn request_permissions(&self) -> Result<Vec<Permission>, Web3Error>;

    /// `wallet_getPermissions`.
    async fn get_permissions(&self) -> Result<Vec<Permission>, Web3Error>;
}

impl WalletRpcApi for Web3 {
    async fn switch_chain(&self, chain_id: u64) -> Result<(), Web3Error> {
        let params = serde_json::json!([{ "chainId": format_quantity(chain_id) }]);
        self.request("wallet_switchEthereumChain", Some(params))
            .await?;
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), Web3Error> {
        let params = serde_json::json!([params]);
        self.request("wallet_addEthereumChain", Some(params)).await?;
        Ok(())
    }

    async fn watch_asset(&self, params: &WatchAssetParams) -> Result<bool, Web3Error> {
        // wallet_watchAsset takes a bare object, not a params array.
        let params = serde_json::to_value(params)
            .map_err(|e| Web3Error::Decode(e.to_string()))?;
        self.request_as("wallet_watchAsset", Some(params)).await
    }

    async fn request_permissions(&self) -> Result<Vec<Permission>, Web3Error> {
        let params = serde_json::json!([{ "eth_accounts": {} }]);
        self.request_as("wallet_requestPermissions", Some(params))
            .await
    }

    async fn get_permissions(&self) -> Result<Vec<Permission>, Web3Error> {
        self.request_as("wallet_getPermissions", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_chain_params_wire_shape() {
        let params = AddChainParams::new(
            137,
            "Polygon Mainnet",
            vec!["https://polygon-rpc.com".to_string()],
        )
        .with_native_currency(NativeCurrency {
            name: "POL".to_string(),
            symbol: "POL".to_string(),
            decimals: 18,
        })
        .with_block_explorer("https://polygonscan.com");

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["chainId"], "0x89");
        assert_eq!(value["chainName"], "Polygon Mainnet");
        assert_eq!(value["rpcUrls"][0], "https://polygon-rpc.com");
        assert_eq!(value["nativeCurrency"]["decimals"], 18);
        assert_eq!(value["blockExplorerUrls"][0], "https://polygonscan.com");
    }

    #[test]
    fn test_add_chain_params_omits_empty_optionals() {
        let params = AddChainParams::new(1, "Ethereum Mainnet", vec![]);
        let value = serde_json::to_value(&params).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("nativeCurrency"));
        assert!(!object.contains_key("blockExplorerUrls"));
    }

    #[test]
    fn test_watch_asset_params_wire_shape() {
        let params = WatchAssetParams::erc20(
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "USDC",
            6,
        );
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["type"], "ERC20");
        assert_eq!(value["options"]["symbol"], "USDC");
        assert_eq!(value["options"]["decimals"], 6);
        assert!(value["options"].get("image").is_none());
    }

    #[test]
    fn test_permission_decodes_wallet_response() {
        let json = r#"[{
            "parentCapability": "eth_accounts",
            "invoker": "https://dapp.example",
            "caveats": []
        }]"#;
        let permissions: Vec<Permission> = serde_json::from_str(json).unwrap();
        assert_eq!(permissions[0].parent_capability, "eth_accounts");
        assert_eq!(
            permissions[0].invoker.as_deref(),
            Some("https://dapp.example")
        );
    }
}
