//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (queries, refresh counters,
//! dialog state) and delegates shared chrome to `components`. Input
//! validation lives in plain functions next to each page so it can be tested
//! without a browser.

pub mod assets;
pub mod dashboard;
pub mod landing;
pub mod limit_orders;
pub mod login;
pub mod not_found;
pub mod reclaim_rent;
pub mod register;
pub mod token_overview;
pub mod trading;
pub mod transactions;
pub mod trending;
