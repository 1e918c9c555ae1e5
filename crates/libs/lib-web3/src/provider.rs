//! # EIP-1193 Provider Handle
//!
//! Wraps the connection object an injected wallet exposes (the `provider`
//! field of an EIP-6963 announcement) and dispatches JSON-RPC requests
//! through its `request` function.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::Web3Error;

/// Handle to an injected wallet's EIP-1193 connection object.
///
/// Cloning is cheap (the underlying `JsValue` is reference-counted on the
/// JavaScript side); all clones refer to the same live wallet object.
#[derive(Clone, Debug)]
pub struct Eip1193Provider {
    raw: JsValue,
}

impl Eip1193Provider {
    pub fn new(raw: JsValue) -> Self {
        Self { raw }
    }

    /// The underlying JavaScript object, for interop that needs it directly.
    pub fn raw(&self) -> &JsValue {
        &self.raw
    }

    /// Whether two handles refer to the same injected object.
    pub fn same_handle(&self, other: &Self) -> bool {
        js_sys::Object::is(&self.raw, &other.raw)
    }

    /// Dispatch a JSON-RPC request through the provider.
    ///
    /// Builds the EIP-1193 request arguments `{ method, params }`, invokes
    /// `provider.request(args)` and awaits the returned promise. Rejections
    /// are mapped through [`Web3Error::from_js`], so ProviderRpcError objects
    /// surface as [`Web3Error::Rpc`].
    pub async fn request(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<JsValue, Web3Error> {
        let args = js_sys::Object::new();
        js_sys::Reflect::set(
            &args,
            &JsValue::from_str("method"),
            &JsValue::from_str(method),
        )
        .map_err(Web3Error::from_js)?;

        if let Some(params) = params {
            // json_compatible keeps maps as plain objects; wallets reject
            // params delivered as JS Map instances.
            let serializer = serde_wasm_bindgen::Serializer::json_compatible();
            let params_js = params
                .serialize(&serializer)
                .map_err(|e| Web3Error::Decode(e.to_string()))?;
            js_sys::Reflect::set(&args, &JsValue::from_str("params"), &params_js)
                .map_err(Web3Error::from_js)?;
        }

        let request_fn = js_sys::Reflect::get(&self.raw, &JsValue::from_str("request"))
            .map_err(Web3Error::from_js)?;
        let request_fn: js_sys::Function = request_fn
            .dyn_into()
            .map_err(|_| Web3Error::Js("provider does not expose a request function".to_string()))?;

        let result = request_fn
            .call1(&self.raw, &args)
            .map_err(Web3Error::from_js)?;
        let promise: js_sys::Promise = result
            .dyn_into()
            .map_err(|_| Web3Error::Js("provider request did not return a promise".to_string()))?;

        JsFuture::from(promise).await.map_err(Web3Error::from_js)
    }

    /// [`request`](Self::request), deserializing the response.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<T, Web3Error> {
        let value = self.request(method, params).await?;
        serde_wasm_bindgen::from_value(value).map_err(|e| Web3Error::Decode(e.to_string()))
    }
}

impl PartialEq for Eip1193Provider {
    fn eq(&self, other: &Self) -> bool {
        self.same_handle(other)
    }
}
