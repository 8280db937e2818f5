//! Backend REST paths.
//!
//! Static routes are constants; parameterized routes are small builders so
//! callers never hand-format query strings.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const VALIDATE_SESSION: &str = "/api/auth/validate-session";
pub const LOGIN: &str = "/api/auth/login";
pub const REGISTER: &str = "/api/auth/register";
pub const LOGOUT: &str = "/api/auth/logout";
pub const OTP_REQUEST: &str = "/api/otp/request";

pub const DASHBOARD: &str = "/api/user/dashboard";
pub const BALANCE: &str = "/api/user/balance";
pub const TRANSFER: &str = "/api/user/transfer";
pub const TRADE: &str = "/api/user/trade";
pub const ORDERS: &str = "/api/user/orders";

pub const SOL_PRICE: &str = "/api/price/sol";

pub const BURN: &str = "/api/token/burn";
pub const EMPTY_ACCOUNTS: &str = "/api/token/empty-accounts";
pub const CLOSE_ACCOUNT: &str = "/api/token/close";

/// Page size every list view requests.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Lookback windows offered by the trending view, in hours.
pub const TRENDING_WINDOWS: [u32; 3] = [1, 6, 24];

/// Join the configured backend base URL with an API path.
///
/// An empty base yields the bare path (same-origin requests).
#[must_use]
pub fn url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim().trim_end_matches('/'))
}

#[must_use]
pub fn assets(page: u32, limit: u32, status: &str) -> String {
    format!("/api/user/assets?page={page}&limit={limit}&status={}", urlencoding::encode(status))
}

#[must_use]
pub fn transactions(page: u32, limit: u32) -> String {
    format!("/api/user/transactions?page={page}&limit={limit}")
}

#[must_use]
pub fn orders(page: u32, limit: u32) -> String {
    format!("{ORDERS}?page={page}&limit={limit}")
}

#[must_use]
pub fn order(order_id: &str) -> String {
    format!("{ORDERS}/{}", urlencoding::encode(order_id))
}

#[must_use]
pub fn trending(hour: u32, limit: u32) -> String {
    format!("/api/user/trending?hour={hour}&limit={limit}")
}

#[must_use]
pub fn token_price(mint: &str) -> String {
    format!("/api/price/token?mint={}", urlencoding::encode(mint.trim()))
}

#[must_use]
pub fn token_overview(mint: &str) -> String {
    format!("/api/token/overview/{}", urlencoding::encode(mint.trim()))
}
