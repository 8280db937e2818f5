//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`, `query`) so pages depend on
//! small focused models. Each model is a plain struct shared as an
//! `RwSignal` through Leptos context.

pub mod auth;
pub mod query;
pub mod toast;
