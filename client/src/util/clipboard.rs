//! Clipboard access for addresses shown on the wallet pages.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Copy `text` and confirm with a toast naming `what` was copied.
pub fn copy_text(text: String, what: &'static str, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::toast::{notify_failure, notify_success};

        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => notify_success(toasts, "Copied", &format!("{what} copied to clipboard")),
            Err(e) => {
                log::warn!("clipboard write failed: {e:?}");
                notify_failure(toasts, "Not supported", "Clipboard access not available. Please copy manually");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, what, toasts);
    }
}

/// Read the clipboard into `target`.
pub fn paste_into(target: RwSignal<String>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::toast::{notify_failure, notify_success};

        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().read_text();
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(value) => {
                target.set(value.as_string().unwrap_or_default().trim().to_owned());
                notify_success(toasts, "Pasted", "Wallet address pasted successfully");
            }
            Err(e) => {
                log::warn!("clipboard read failed: {e:?}");
                notify_failure(toasts, "Paste manually", "Please use Ctrl+V to paste the wallet address");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, toasts);
    }
}
