//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod clipboard;
pub mod forms;
pub mod local_storage;
pub mod otp;
pub mod trade_links;
