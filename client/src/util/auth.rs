//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, and every sign-in or
//! sign-out path goes through the same `wire::session` transitions with the
//! browser store and HTTP backend plugged in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use wire::types::AuthPayload;

use crate::net::session_store::LocalSessionStore;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// Protected views must leave for `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.session.should_redirect_to_login()
}

/// Login and register leave for `/dashboard` once signed in.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.session.is_authenticated()
}

/// Redirect to `/login` whenever auth has settled without a session.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/dashboard` once a session is confirmed.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/dashboard", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Read the stored session and revalidate it with the backend.
///
/// The stored user is shown provisionally while validation is in flight.
pub fn restore_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use wire::SessionStore;

        let store = LocalSessionStore;
        auth.set(AuthState::from_session(wire::SessionState::restoring(store.load())));
        leptos::task::spawn_local(async move {
            let restored = wire::session::restore(&crate::net::api::HttpAuthBackend, &store).await;
            if let Some(e) = &restored.failure {
                log::warn!("stored session rejected: {e}");
            }
            auth.set(AuthState::from_session(restored.state));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Persist a fresh login/registration and mark the session authenticated.
pub fn complete_sign_in(auth: RwSignal<AuthState>, payload: AuthPayload) {
    let state = wire::session::sign_in(&LocalSessionStore, payload);
    auth.set(AuthState::from_session(state));
}

/// Title and description of the notice shown after a logout attempt.
pub fn logout_notice(outcome: &wire::LogoutOutcome) -> (&'static str, String) {
    match outcome {
        wire::LogoutOutcome::Confirmed | wire::LogoutOutcome::NoSession => {
            ("Logged Out", "You have been logged out.".to_owned())
        }
        wire::LogoutOutcome::Failed(e) => (
            "Logged Out Locally",
            format!("The server could not confirm the logout ({}). Your local session was cleared.", e.summary()),
        ),
    }
}

/// Revoke the session (best effort), clear it locally, and go to `/login`.
pub fn sign_out(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let current = auth.get_untracked().session;
        let (state, outcome) =
            wire::session::sign_out(&crate::net::api::HttpAuthBackend, &LocalSessionStore, &current).await;
        auth.set(AuthState::from_session(state));
        let (title, description) = logout_notice(&outcome);
        match outcome {
            wire::LogoutOutcome::Failed(_) => crate::state::toast::notify_failure(toasts, title, &description),
            _ => crate::state::toast::notify_success(toasts, title, &description),
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, toasts);
    }
}
