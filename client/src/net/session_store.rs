//! `localStorage`-backed session persistence.
//!
//! The token is stored as a bare string under `auth_token` and the user as
//! JSON under `auth_user`. A session is only restored when both are present
//! and the user parses.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use wire::session::{TOKEN_KEY, USER_KEY};
use wire::{Session, SessionStore, User};

use crate::util::local_storage;

/// [`SessionStore`] over the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        session_from_parts(local_storage::load_text(TOKEN_KEY), local_storage::load_json::<User>(USER_KEY))
    }

    fn save(&self, session: &Session) {
        local_storage::save_text(TOKEN_KEY, &session.token);
        local_storage::save_json(USER_KEY, &session.user);
    }

    fn clear(&self) {
        local_storage::remove(TOKEN_KEY);
        local_storage::remove(USER_KEY);
    }
}

fn session_from_parts(token: Option<String>, user: Option<User>) -> Option<Session> {
    let token = token.filter(|t| !t.trim().is_empty())?;
    Some(Session { token, user: user? })
}
