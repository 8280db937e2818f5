//! Shared wire schema for the Keylo wallet backend.
//!
//! This crate owns the JSON contract consumed by both `client` (browser) and
//! `cli` (terminal). Every backend endpoint answers with the same
//! `{ success, message, data }` envelope; [`envelope`] turns that into a
//! `Result`, [`types`] holds the payload DTOs, [`endpoints`] builds request
//! paths, and [`session`] drives the auth lifecycle against any store and
//! transport. Nothing here performs I/O.

pub mod endpoints;
pub mod envelope;
pub mod format;
pub mod session;
pub mod types;

pub use envelope::{ApiError, FieldError, Reply, decode_response};
pub use session::{AuthBackend, LogoutOutcome, SessionPhase, SessionState, SessionStore};
pub use types::{Session, User};
