//! Auth session lifecycle shared by the browser and terminal clients.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session moves `Unauthenticated → Validating → Authenticated`, falling
//! back to `Unauthenticated` whenever validation fails. Persistence and
//! transport are abstracted behind [`SessionStore`] and [`AuthBackend`] so
//! the same rules apply to `localStorage` + `fetch` in the browser and to a
//! JSON file + reqwest in the CLI.
//!
//! INVARIANTS
//! ==========
//! - A failed validation always empties the store.
//! - Sign-out always empties the store and yields `Unauthenticated`, whatever
//!   the backend answered.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use crate::envelope::ApiError;
use crate::types::{AuthPayload, Session, User};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// `localStorage` key holding the JSON-encoded user.
pub const USER_KEY: &str = "auth_user";

/// Where the client is in the auth lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No usable session; protected views redirect to login.
    Unauthenticated,
    /// A stored session is being checked with the backend. This is also the
    /// boot state, before storage has been read.
    #[default]
    Validating,
    /// The backend confirmed the session.
    Authenticated,
}

/// Current phase plus the session data, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub session: Option<Session>,
}

impl SessionState {
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { phase: SessionPhase::Unauthenticated, session: None }
    }

    /// Initial state from whatever the store held.
    ///
    /// A stored session is kept provisionally while it is being validated.
    #[must_use]
    pub fn restoring(stored: Option<Session>) -> Self {
        match stored {
            Some(session) => Self { phase: SessionPhase::Validating, session: Some(session) },
            None => Self::unauthenticated(),
        }
    }

    #[must_use]
    pub fn authenticated(session: Session) -> Self {
        Self { phase: SessionPhase::Authenticated, session: Some(session) }
    }

    /// Whether the initial validation is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Validating
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    /// Protected views must send the visitor to login.
    #[must_use]
    pub fn should_redirect_to_login(&self) -> bool {
        self.phase == SessionPhase::Unauthenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Bearer token for data requests, only once the session is confirmed
    /// and both token and user are present.
    #[must_use]
    pub fn credentials(&self) -> Option<&str> {
        if !self.is_authenticated() {
            return None;
        }
        self.session
            .as_ref()
            .filter(|s| !s.token.is_empty() && !s.user.id.is_empty())
            .map(|s| s.token.as_str())
    }
}

/// Durable storage for the session.
///
/// Implementations swallow their own I/O failures: losing persistence must
/// never block a login or a logout.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Transport for the two auth calls the lifecycle makes on its own.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Confirm `token` and return the user it belongs to.
    async fn validate_session(&self, token: &str) -> Result<User, ApiError>;
    /// Invalidate `token` server-side.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

/// Outcome of [`restore`]: the resulting state and why validation failed, if it did.
#[derive(Clone, Debug, PartialEq)]
pub struct Restored {
    pub state: SessionState,
    pub failure: Option<ApiError>,
}

/// Load the stored session and confirm it with the backend.
///
/// On success the user returned by the backend replaces the stored copy. On
/// any failure the store is cleared.
pub async fn restore<B, S>(backend: &B, store: &S) -> Restored
where
    B: AuthBackend,
    S: SessionStore,
{
    let Some(stored) = store.load() else {
        return Restored { state: SessionState::unauthenticated(), failure: None };
    };
    match backend.validate_session(&stored.token).await {
        Ok(user) => {
            let session = Session { token: stored.token, user };
            store.save(&session);
            Restored { state: SessionState::authenticated(session), failure: None }
        }
        Err(e) => {
            store.clear();
            Restored { state: SessionState::unauthenticated(), failure: Some(e) }
        }
    }
}

/// Persist a fresh login/registration and return the authenticated state.
pub fn sign_in<S: SessionStore>(store: &S, payload: AuthPayload) -> SessionState {
    let session = Session::from(payload);
    store.save(&session);
    SessionState::authenticated(session)
}

/// How the backend took the logout call.
#[derive(Clone, Debug, PartialEq)]
pub enum LogoutOutcome {
    /// The backend confirmed the logout.
    Confirmed,
    /// The backend refused or could not be reached; the local logout still happened.
    Failed(ApiError),
    /// There was no token to revoke.
    NoSession,
}

/// Revoke the session server-side (best effort) and always clear it locally.
pub async fn sign_out<B, S>(backend: &B, store: &S, state: &SessionState) -> (SessionState, LogoutOutcome)
where
    B: AuthBackend,
    S: SessionStore,
{
    let outcome = match state.token() {
        Some(token) => match backend.logout(token).await {
            Ok(()) => LogoutOutcome::Confirmed,
            Err(e) => LogoutOutcome::Failed(e),
        },
        None => LogoutOutcome::NoSession,
    };
    store.clear();
    (SessionState::unauthenticated(), outcome)
}

/// In-memory [`SessionStore`], used during server rendering and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { slot: RefCell::new(Some(session)) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
