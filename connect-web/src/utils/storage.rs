//! Local storage access
//!
//! Absence and storage failures (private browsing, storage disabled) degrade
//! to `None` / no-op; persistence is best-effort.

use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("local storage unavailable; wallet selection will not persist");
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("failed to persist {key} to local storage");
    }
}
