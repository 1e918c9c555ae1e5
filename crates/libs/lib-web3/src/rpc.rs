//! # Shared Web3 Client
//!
//! One [`Web3`] instance is shared by the whole UI tree. The client holds at
//! most one bound [`Eip1193Provider`]; rebinding it switches every consumer
//! to the newly selected wallet. Requests made before any provider is bound
//! fail with [`Web3Error::NoProvider`].

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::json;
use wasm_bindgen::JsValue;

use crate::error::Web3Error;
use crate::provider::Eip1193Provider;

/// Shared wallet RPC client.
///
/// Clones share one provider slot (single-threaded browser model), so a
/// `set_provider` through any clone is observed by all of them.
#[derive(Clone, Default)]
pub struct Web3 {
    inner: Rc<RefCell<Option<Eip1193Provider>>>,
}

impl Web3 {
    /// Create a client with no provider bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the client to a wallet's connection handle, replacing any
    /// previous binding.
    pub fn set_provider(&self, provider: Eip1193Provider) {
        *self.inner.borrow_mut() = Some(provider);
    }

    /// The currently bound handle, if any.
    pub fn provider(&self) -> Option<Eip1193Provider> {
        self.inner.borrow().clone()
    }

    pub fn has_provider(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Dispatch a raw JSON-RPC request through the bound provider.
    pub async fn request(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<JsValue, Web3Error> {
        // Clone the handle out so no RefCell borrow is held across the await.
        let provider = self.provider().ok_or(Web3Error::NoProvider)?;
        provider.request(method, params).await
    }

    /// [`request`](Self::request), deserializing the response.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<T, Web3Error> {
        let provider = self.provider().ok_or(Web3Error::NoProvider)?;
        provider.request_as(method, params).await
    }

    /// Prompt the wallet for account access (`eth_requestAccounts`).
    pub async fn request_accounts(&self) -> Result<Vec<String>, Web3Error> {
        self.request_as("eth_requestAccounts", None).await
    }

    /// Accounts already exposed to this page (`eth_accounts`), no prompt.
    pub async fn accounts(&self) -> Result<Vec<String>, Web3Error> {
        self.request_as("eth_accounts", None).await
    }

    /// The chain the wallet is currently on (`eth_chainId`).
    pub async fn chain_id(&self) -> Result<u64, Web3Error> {
        let hex: String = self.request_as("eth_chainId", None).await?;
        parse_quantity(&hex)
    }

    /// Account balance in wei, as the raw hex quantity (`eth_getBalance`).
    pub async fn balance_of(&self, address: &str) -> Result<String, Web3Error> {
        self.request_as("eth_getBalance", Some(json!([address, "latest"])))
            .await
    }

    /// Client identification string (`web3_clientVersion`).
    pub async fn client_version(&self) -> Result<String, Web3Error> {
        self.request_as("web3_clientVersion", None).await
    }
}

/// Parse a 0x-prefixed hex quantity as used by the Ethereum JSON-RPC wire
/// format (`"0x1"`, `"0xaa36a7"`).
pub fn parse_quantity(value: &str) -> Result<u64, Web3Error> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| Web3Error::Decode(format!("quantity missing 0x prefix: {value}")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| Web3Error::Decode(format!("invalid hex quantity {value}: {e}")))
}

/// Format a value as a 0x-prefixed hex quantity, no leading zeros.
pub fn format_quantity(value: u64) -> String {
    format!("{value:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x1").unwrap(), 1);
        assert_eq!(parse_quantity("0x89").unwrap(), 137);
        assert_eq!(parse_quantity("0xaa36a7").unwrap(), 11_155_111);
        assert_eq!(parse_quantity("0XAA36A7").unwrap(), 11_155_111);
    }

    #[test]
    fn test_parse_quantity_rejects_bad_input() {
        assert!(parse_quantity("1").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(1), "0x1");
        assert_eq!(format_quantity(137), "0x89");
        assert_eq!(format_quantity(11_155_111), "0xaa36a7");
    }

    #[test]
    fn test_quantity_roundtrip() {
        for value in [0u64, 1, 137, 42_161, 11_155_111, u64::MAX] {
            assert_eq!(parse_quantity(&format_quantity(value)).unwrap(), value);
        }
    }
}
