//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the session
//! store does not repeat web-sys glue. On the server every read is empty and
//! every write is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_text(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`.
pub fn save_text(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_text(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_text(key, &raw);
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
