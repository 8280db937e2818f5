//! Transient notifications ("toasts").
//!
//! DESIGN
//! ======
//! Pages never render their own success/error banners for mutations; they
//! push toasts here and the `Toaster` component renders the stack. Every
//! toast expires after `config::TOAST_TTL`.
//!
//! ERROR HANDLING
//! ==============
//! [`notices_for`] is the single mapping from `ApiError` to user-facing
//! notices: network failures get a fixed "Connection Error" notice,
//! validation failures get one notice per field, and everything else is
//! titled by the caller.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use wire::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Destructive,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Stack of live toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, title: title.to_owned(), description: description.to_owned() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// A notice derived from an error, before it becomes a toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Map an API failure to the notices shown to the user.
pub fn notices_for(title: &str, error: &ApiError) -> Vec<Notice> {
    match error {
        ApiError::Network(_) => vec![Notice { title: "Connection Error".to_owned(), description: error.summary() }],
        ApiError::Validation(fields) => fields
            .iter()
            .map(|f| Notice { title: "Validation Error".to_owned(), description: f.message.clone() })
            .collect(),
        ApiError::Application(_) | ApiError::Decode(_) => {
            vec![Notice { title: title.to_owned(), description: error.summary() }]
        }
    }
}

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: &str) {
    let id = toasts.try_update(|t| t.push(kind, title, description)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::config::TOAST_TTL).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn notify_success(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    notify(toasts, ToastKind::Success, title, description);
}

pub fn notify_failure(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    notify(toasts, ToastKind::Destructive, title, description);
}

/// Show the destructive notices for an API failure.
pub fn notify_api_error(toasts: RwSignal<ToastState>, title: &str, error: &ApiError) {
    #[cfg(feature = "hydrate")]
    log::warn!("{title}: {error}");
    for notice in notices_for(title, error) {
        notify_failure(toasts, &notice.title, &notice.description);
    }
}
