//! Error types for wallet discovery and RPC dispatch

use thiserror::Error;
use wasm_bindgen::JsValue;

/// EIP-1193 error code a wallet returns from `wallet_switchEthereumChain`
/// when the requested chain has not been added to it yet.
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// EIP-1193 error code for a request the user rejected in the wallet UI.
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Error)]
pub enum Web3Error {
    #[error("No provider is bound to the client")]
    NoProvider,

    /// Structured ProviderRpcError thrown by the injected provider.
    #[error("Provider RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Any other value thrown across the JavaScript boundary.
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Browser environment error: {0}")]
    Dom(String),
}

impl Web3Error {
    /// Map a thrown `JsValue` into a typed error.
    ///
    /// EIP-1193 providers reject with a ProviderRpcError object carrying
    /// numeric `code` and string `message` fields; anything else is
    /// stringified as-is.
    pub fn from_js(value: JsValue) -> Self {
        let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|v| v.as_f64());
        let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string());

        match (code, message) {
            (Some(code), Some(message)) => Web3Error::Rpc {
                code: code as i64,
                message,
            },
            _ => {
                let text = value
                    .as_string()
                    .unwrap_or_else(|| format!("{:?}", value));
                Web3Error::Js(text)
            }
        }
    }

    /// True when a chain-switch failed because the wallet does not know the
    /// chain (code 4902), which callers handle by adding the chain first.
    pub fn is_unrecognized_chain(&self) -> bool {
        matches!(self, Web3Error::Rpc { code, .. } if *code == UNRECOGNIZED_CHAIN_CODE)
    }

    /// True when the user dismissed the wallet prompt (code 4001).
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Web3Error::Rpc { code, .. } if *code == USER_REJECTED_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_chain_detection() {
        let err = Web3Error::Rpc {
            code: UNRECOGNIZED_CHAIN_CODE,
            message: "Unrecognized chain ID".to_string(),
        };
        assert!(err.is_unrecognized_chain());
        assert!(!err.is_user_rejection());
    }

    #[test]
    fn test_user_rejection_detection() {
        let err = Web3Error::Rpc {
            code: USER_REJECTED_CODE,
            message: "User rejected the request".to_string(),
        };
        assert!(err.is_user_rejection());
        assert!(!err.is_unrecognized_chain());
    }

    #[test]
    fn test_other_errors_match_neither() {
        assert!(!Web3Error::NoProvider.is_unrecognized_chain());
        assert!(!Web3Error::Js("boom".to_string()).is_user_rejection());
    }
}
