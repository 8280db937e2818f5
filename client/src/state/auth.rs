//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Transitions themselves live in
//! `wire::session`; this wrapper only adds view-oriented accessors.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use wire::{SessionState, User};

/// Authentication state shared through context as `RwSignal<AuthState>`.
///
/// The default is "validating" so that server rendering and the first client
/// frame show a loading state rather than bouncing to `/login`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: SessionState,
}

impl AuthState {
    pub fn from_session(session: SessionState) -> Self {
        Self { session }
    }

    pub fn loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Bearer token, only once the session has been confirmed.
    pub fn token(&self) -> Option<&str> {
        self.session.credentials()
    }

    /// Name shown in the sidebar and greeting; falls back to the email.
    pub fn display_name(&self) -> String {
        match self.user() {
            Some(user) if !user.name.trim().is_empty() => user.name.clone(),
            Some(user) => user.email.clone(),
            None => String::new(),
        }
    }
}
