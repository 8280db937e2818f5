//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the authenticated chrome (sidebar, toasts, dialogs,
//! paging) while reading/writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod pager;
pub mod protected_page;
pub mod receipt_dialog;
pub mod sidebar;
pub mod toaster;
pub mod view_status;
