//! Networking and persistence for the wallet backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every backend REST endpoint and `session_store` persists the
//! auth session in `localStorage`. The wire schema itself lives in the
//! `wire` crate.

pub mod api;
pub mod session_store;
