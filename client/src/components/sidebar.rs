//! Navigation sidebar for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `ProtectedPage` on every signed-in route. Shows the nav
//! entries, the signed-in user's name, and the logout action.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// `(label, path)` for each sidebar entry, in display order.
pub const NAV_ITEMS: [(&str, &str); 8] = [
    ("Dashboard", "/dashboard"),
    ("Trading Menu", "/trading"),
    ("Limit Orders", "/limit-orders"),
    ("Token Overview", "/token-overview"),
    ("Trending", "/trending"),
    ("My Assets", "/assets"),
    ("My Transactions", "/transactions"),
    ("Reclaim Rent", "/reclaim-rent"),
];

/// Whether the entry for `path` is the current route.
pub fn is_active(current: &str, path: &str) -> bool {
    let current = current.trim_end_matches('/');
    current == path || current.strip_prefix(path).is_some_and(|rest| rest.starts_with('/'))
}

fn nav_class(current: &str, path: &str) -> &'static str {
    if is_active(current, path) { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pathname = use_location().pathname;

    let on_logout = move |_| crate::util::auth::sign_out(auth, toasts);

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href="/dashboard">"Keylo"</a>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, path)| {
                        view! {
                            <a class=move || nav_class(&pathname.get(), path) href=path>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__user">{move || auth.get().display_name()}</span>
                <button class="btn sidebar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
