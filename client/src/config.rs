//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read the host environment at runtime, so the
//! backend base URL is baked in at compile time from `BACKEND_API_URL`. An
//! unset or empty value means same-origin requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const BACKEND_API_URL: Option<&str> = option_env!("BACKEND_API_URL");

/// How often the assets and trading pages re-fetch the SOL price.
pub const SOL_PRICE_POLL: Duration = Duration::from_secs(30);

/// Cooldown before another one-time passcode may be requested.
pub const OTP_RESEND_SECS: u32 = 60;

/// Lifetime of a toast notification.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Backend base URL without a trailing slash.
pub fn backend_base() -> &'static str {
    normalize_base(BACKEND_API_URL.unwrap_or_default())
}

fn normalize_base(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}
