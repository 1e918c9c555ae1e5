//! # EIP-6963 Provider Discovery
//!
//! Multi-wallet discovery over window events. Wallet extensions announce
//! themselves with `eip6963:announceProvider` (a CustomEvent whose detail
//! carries `{ info, provider }`); pages dispatch `eip6963:requestProvider`
//! to make already-loaded wallets announce again.

use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::Web3Error;
use crate::provider::Eip1193Provider;

pub const ANNOUNCE_EVENT: &str = "eip6963:announceProvider";
pub const REQUEST_EVENT: &str = "eip6963:requestProvider";

/// Wallet metadata from an EIP-6963 announcement.
///
/// Field names follow the standard's `EIP6963ProviderInfo` shape. The `rdns`
/// (reverse-domain identifier, e.g. `io.metamask`) is the stable identity a
/// selection is persisted under; `uuid` is only unique per page load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub uuid: String,
    pub name: String,
    /// Icon as a data URI, renderable directly in an `img` tag.
    pub icon: String,
    pub rdns: String,
}

/// A discovered wallet: its metadata plus the live connection handle.
#[derive(Clone, Debug)]
pub struct ProviderDetail {
    pub info: ProviderInfo,
    pub provider: Eip1193Provider,
}

impl PartialEq for ProviderDetail {
    // Announcements are keyed by uuid; handle identity is not consulted
    // because wallets may hand out fresh objects on re-announcement.
    fn eq(&self, other: &Self) -> bool {
        self.info.uuid == other.info.uuid
    }
}

/// Subscribe to wallet announcements and ask loaded wallets to announce.
///
/// `on_announce` is invoked once per announcement event, including repeats
/// from the same wallet; callers de-duplicate by uuid. The listener stays
/// registered for the lifetime of the page (the closure is intentionally
/// leaked), matching the single page-load discovery model.
pub fn watch_providers<F>(mut on_announce: F) -> Result<(), Web3Error>
where
    F: FnMut(ProviderDetail) + 'static,
{
    let window =
        web_sys::window().ok_or_else(|| Web3Error::Dom("no window available".to_string()))?;

    let handler = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(
        move |event: web_sys::CustomEvent| match parse_announcement(event.detail()) {
            Some(detail) => {
                log::info!(
                    "wallet announced: {} ({})",
                    detail.info.name,
                    detail.info.rdns
                );
                on_announce(detail);
            }
            None => log::warn!("ignoring malformed {} event", ANNOUNCE_EVENT),
        },
    );
    window
        .add_event_listener_with_callback(ANNOUNCE_EVENT, handler.as_ref().unchecked_ref())
        .map_err(Web3Error::from_js)?;
    handler.forget();

    // Wallets that injected before this listener existed re-announce in
    // response to the request event.
    let request =
        web_sys::Event::new(REQUEST_EVENT).map_err(Web3Error::from_js)?;
    window
        .dispatch_event(&request)
        .map_err(Web3Error::from_js)?;

    Ok(())
}

/// Find the announced wallet whose rdns matches a persisted identifier.
///
/// `None` when nothing matches; restoring a stale selection is a no-op, not
/// an error.
pub fn find_by_rdns<'a>(providers: &'a [ProviderDetail], rdns: &str) -> Option<&'a ProviderDetail> {
    providers.iter().find(|detail| detail.info.rdns == rdns)
}

/// Decode an announcement's `detail` into a [`ProviderDetail`].
///
/// Announcements missing `info`, carrying undecodable metadata, or missing
/// the `provider` handle are skipped (returns `None`), never an error.
fn parse_announcement(detail: JsValue) -> Option<ProviderDetail> {
    if !detail.is_object() {
        return None;
    }

    let info_js = js_sys::Reflect::get(&detail, &JsValue::from_str("info")).ok()?;
    let info: ProviderInfo = serde_wasm_bindgen::from_value(info_js).ok()?;

    let provider = js_sys::Reflect::get(&detail, &JsValue::from_str("provider")).ok()?;
    if provider.is_undefined() || provider.is_null() {
        return None;
    }

    Some(ProviderDetail {
        info,
        provider: Eip1193Provider::new(provider),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // JsValue::NULL is a reserved constant: constructing and dropping it
    // involves no JavaScript heap, so these tests run natively.
    fn detail(uuid: &str, rdns: &str) -> ProviderDetail {
        ProviderDetail {
            info: ProviderInfo {
                uuid: uuid.to_string(),
                name: "Wallet".to_string(),
                icon: "data:,".to_string(),
                rdns: rdns.to_string(),
            },
            provider: Eip1193Provider::new(JsValue::NULL),
        }
    }

    #[test]
    fn test_find_by_rdns_matches_persisted_identifier() {
        let providers = vec![
            detail("u-1", "io.metamask"),
            detail("u-2", "com.coinbase.wallet"),
        ];
        let found = find_by_rdns(&providers, "com.coinbase.wallet").unwrap();
        assert_eq!(found.info.uuid, "u-2");
    }

    #[test]
    fn test_find_by_rdns_no_match_is_none() {
        let providers = vec![detail("u-1", "io.metamask")];
        assert!(find_by_rdns(&providers, "io.rabby").is_none());
        assert!(find_by_rdns(&[], "io.metamask").is_none());
    }

    #[test]
    fn test_detail_equality_keyed_by_uuid() {
        let a = detail("u-1", "io.metamask");
        let b = detail("u-1", "io.metamask.flask");
        let c = detail("u-2", "io.metamask");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_provider_info_decodes_standard_shape() {
        let json = r#"{
            "uuid": "350670db-19fa-4704-a166-e52e178b59d2",
            "name": "Example Wallet",
            "icon": "data:image/svg+xml;base64,PHN2Zz48L3N2Zz4=",
            "rdns": "com.example.wallet"
        }"#;
        let info: ProviderInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "Example Wallet");
        assert_eq!(info.rdns, "com.example.wallet");
        assert!(info.icon.starts_with("data:image/"));
    }

    #[test]
    fn test_provider_info_rejects_missing_rdns() {
        let json = r#"{
            "uuid": "350670db-19fa-4704-a166-e52e178b59d2",
            "name": "Example Wallet",
            "icon": "data:image/svg+xml;base64,PHN2Zz48L3N2Zz4="
        }"#;
        assert!(serde_json::from_str::<ProviderInfo>(json).is_err());
    }

    #[test]
    fn test_provider_info_roundtrip_preserves_identity() {
        let info = ProviderInfo {
            uuid: "u-1".to_string(),
            name: "Wallet".to_string(),
            icon: "data:,".to_string(),
            rdns: "io.metamask".to_string(),
        };
        let encoded = serde_json::to_string(&info).unwrap();
        let decoded: ProviderInfo = serde_json::from_str(&encoded).unwrap();
        assert_eq!(info, decoded);
    }
}
