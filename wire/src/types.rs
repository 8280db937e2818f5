//! Payload DTOs carried inside the response envelope.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly (mostly camelCase, `_id` for
//! document ids, a few snake_case request bodies). Read-side structs default
//! every missing field so a backend that omits a counter does not blank out a
//! whole page. Numeric fields that the backend sometimes sends as strings go
//! through [`lenient_f64`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Mint address of wrapped SOL, used when transferring native SOL.
pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

// =============================================================
// Auth
// =============================================================

/// The authenticated account as returned by the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Custodial wallet address assigned by the backend.
    pub wallet: String,
    pub role: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Bearer token plus the user it belongs to; the only durable client state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// `data` of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

impl From<AuthPayload> for Session {
    fn from(payload: AuthPayload) -> Self {
        Self { token: payload.token, user: payload.user }
    }
}

/// `data` of a successful session validation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ValidatedSession {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// What a one-time passcode is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    Login,
    Register,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpRequest {
    #[serde(rename = "type")]
    pub purpose: OtpPurpose,
    pub email: String,
}

// =============================================================
// Shared enums
// =============================================================

/// Trade direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    #[default]
    Buy,
    Sell,
}

/// Whether a limit order fires above (`High`) or below (`Low`) its trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    High,
    Low,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Waiting,
    Triggered,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Execution venue passed through to the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dex {
    Raydium,
    Meteora,
    Pumpfun,
    Launchlab,
    Moonshot,
    #[default]
    Jupiter,
}

impl Dex {
    pub const ALL: [Dex; 6] = [
        Dex::Raydium,
        Dex::Meteora,
        Dex::Pumpfun,
        Dex::Launchlab,
        Dex::Moonshot,
        Dex::Jupiter,
    ];

    /// Wire value (`"jupiter"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raydium => "raydium",
            Self::Meteora => "meteora",
            Self::Pumpfun => "pumpfun",
            Self::Launchlab => "launchlab",
            Self::Moonshot => "moonshot",
            Self::Jupiter => "jupiter",
        }
    }

    /// Display label (`"Jupiter"`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Raydium => "Raydium",
            Self::Meteora => "Meteora",
            Self::Pumpfun => "PumpFun",
            Self::Launchlab => "LaunchLab",
            Self::Moonshot => "Moonshot",
            Self::Jupiter => "Jupiter",
        }
    }
}

impl TradeSide {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl OrderType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Triggered => "triggered",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

macro_rules! wire_name_impls {
    ($ty:ty, $what:literal, $all:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim().to_ascii_lowercase();
                $all.into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| format!("unknown {}: {raw}", $what))
            }
        }
    };
}

wire_name_impls!(Dex, "dex", Dex::ALL);
wire_name_impls!(TradeSide, "trade side", [TradeSide::Buy, TradeSide::Sell]);
wire_name_impls!(OrderType, "order type", [OrderType::High, OrderType::Low]);

// =============================================================
// Lists and paging
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(alias = "totalAssets", alias = "totalTransactions", alias = "totalOrders")]
    pub total: u32,
    pub limit: u32,
}

impl Pagination {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

// =============================================================
// Dashboard
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardData {
    #[serde(alias = "account")]
    pub user_info: UserInfo,
    pub portfolio: PortfolioStats,
    #[serde(alias = "trading")]
    pub transactions: TransactionStats,
    pub orders: OrderStats,
    #[serde(alias = "recent")]
    pub recent_activity: RecentActivity,
    pub performance: Performance,
    #[serde(alias = "system")]
    pub market_data: MarketData,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub wallet_address: String,
    pub member_since: String,
    pub account_status: String,
    pub user_role: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioStats {
    pub total_value: f64,
    pub total_assets: u32,
    pub total_profit_loss: f64,
    pub profit_loss_percent: f64,
    pub portfolio_change_today: f64,
    pub portfolio_change_percent: f64,
    pub total_invested: f64,
    pub avg_portfolio_price: f64,
    pub sol_balance: f64,
    pub sol_price: f64,
    pub sol_value_usd: f64,
    pub total_portfolio_value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionStats {
    pub total_transactions: u32,
    pub total_volume: f64,
    pub avg_transaction_value: f64,
    pub successful_transactions: u32,
    pub failed_transactions: u32,
    pub pending_transactions: u32,
    pub send_transactions: u32,
    pub receive_transactions: u32,
    pub swap_transactions: u32,
    pub send_volume: f64,
    pub receive_volume: f64,
    pub swap_volume: f64,
    pub success_rate: f64,
    pub most_active_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderStats {
    pub total_orders: u32,
    pub total_order_value: f64,
    pub waiting_orders: u32,
    pub triggered_orders: u32,
    pub failed_orders: u32,
    pub buy_orders: u32,
    pub sell_orders: u32,
    pub buy_order_value: f64,
    pub sell_order_value: f64,
    pub average_order_value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentActivity {
    pub assets: Vec<Asset>,
    pub transactions: Vec<Transaction>,
    pub orders: Vec<LimitOrder>,
    pub last_transaction_time: Option<String>,
    pub recent_volume24h: f64,
    #[serde(alias = "transactionBreakdown")]
    pub activity_breakdown: ActivityBreakdown,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityBreakdown {
    pub sends: u32,
    pub receives: u32,
    pub swaps: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    #[serde(alias = "topGainers")]
    pub top_performers: Vec<Holding>,
    #[serde(alias = "topLosers")]
    pub worst_performers: Vec<Holding>,
    pub portfolio_change_today: f64,
    pub portfolio_change_percent: f64,
}

/// A position with its cost basis, used by the performance tables.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Holding {
    #[serde(rename = "_id")]
    pub id: String,
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub balance: f64,
    pub buy_price: f64,
    pub current_price: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    pub profit_loss_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketData {
    pub sol_price: f64,
    pub price_last_updated: String,
    pub assets_last_scanned: String,
}

// =============================================================
// Assets, balance, price
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    #[serde(rename = "_id")]
    pub id: String,
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub current_value: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub current_price: f64,
    pub status: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetsSummary {
    pub total_value: f64,
    pub total_assets: u32,
    pub average_price: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetsPage {
    pub assets: Vec<Asset>,
    pub summary: AssetsSummary,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletBalance {
    pub balance: f64,
    pub wallet_address: String,
    pub unit: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolPrice {
    pub sol_price_usd: f64,
    pub usdt_price_in_sol: f64,
    pub usdt_price_in_usd: f64,
    pub last_updated: String,
    pub source: String,
    pub is_valid: bool,
}

/// Token identity and spot price from `/api/price/token`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenPrice {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub price_in_usd: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransferRequest {
    pub mint: String,
    pub amount: f64,
    pub to: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferReceipt {
    pub transaction_id: String,
    pub signature: String,
    pub from: String,
    pub to: String,
    pub mint: String,
    pub amount: f64,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BurnRequest {
    pub mint: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BurnReceipt {
    pub signature: String,
    pub mint: String,
    pub amount: f64,
    pub operation: String,
}

// =============================================================
// Transactions
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub signature: String,
    pub slot: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub dex: String,
    pub mint: String,
    /// Signed amount; negative for outgoing transfers.
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub value: f64,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub from: String,
    pub to: String,
    pub status: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

/// Direction of a transaction row, derived from its type and amount sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionFlow {
    Swap,
    Outgoing,
    Incoming,
    Other,
}

impl Transaction {
    #[must_use]
    pub fn flow(&self) -> TransactionFlow {
        match self.kind.as_str() {
            "swap" => TransactionFlow::Swap,
            "send" => TransactionFlow::Outgoing,
            "receive" => TransactionFlow::Incoming,
            _ if self.amount < 0.0 => TransactionFlow::Outgoing,
            _ if self.amount > 0.0 => TransactionFlow::Incoming,
            _ => TransactionFlow::Other,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionsPage {
    pub transactions: Vec<Transaction>,
    pub pagination: Pagination,
}

// =============================================================
// Limit orders and trades
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LimitOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub amount: f64,
    pub dex: String,
    pub order_type: OrderType,
    pub trigger_price: f64,
    pub current_price: f64,
    pub slippage: f64,
    pub tip: f64,
    pub signature: Option<String>,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub status: OrderStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    pub mint: String,
    pub amount: f64,
    pub dex: Dex,
    pub order_type: OrderType,
    pub trigger_price: f64,
    pub slippage: f64,
    pub tip: f64,
    #[serde(rename = "type")]
    pub side: TradeSide,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateOrderRequest {
    pub amount: f64,
    pub trigger_price: f64,
    pub slippage: f64,
    pub tip: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TradeRequest {
    pub mint: String,
    pub amount: f64,
    pub dex: Dex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage: Option<f64>,
    #[serde(rename = "type")]
    pub side: TradeSide,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeReceipt {
    pub signature: String,
    pub tx_url: String,
    pub price: f64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub side: TradeSide,
}

// =============================================================
// Token discovery
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub telegram: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Creator {
    pub address: String,
    pub verified: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub share: String,
}

/// Token metadata and holder statistics from `/api/token/overview/{mint}`.
///
/// Amounts stay as the backend's decimal strings; they are only formatted,
/// never computed on.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenOverview {
    pub ca: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub description: Option<String>,
    pub socials: Socials,
    #[serde(deserialize_with = "lenient_string")]
    pub decimals: String,
    #[serde(deserialize_with = "lenient_string")]
    pub supply: String,
    pub mint_authority: Option<String>,
    pub freeze_authority: Option<String>,
    pub update_authority: String,
    pub creators: Vec<Creator>,
    pub is_token2022: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub top10_holders_balance: String,
    #[serde(deserialize_with = "lenient_string")]
    pub top10_holders_percent: String,
    #[serde(deserialize_with = "lenient_string")]
    pub top20_holders_balance: String,
    #[serde(deserialize_with = "lenient_string")]
    pub top20_holders_percent: String,
    pub dex: String,
    pub pool_id: Option<String>,
    pub liquidity: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub price_in_sol: String,
    #[serde(deserialize_with = "lenient_string")]
    pub price_in_usd: String,
    pub bonding_curve_progress: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub market_cap: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrendingToken {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub buy_volume_usd: f64,
    pub latest_price: f64,
    pub net_inflow_usd: f64,
    pub sell_volume_usd: f64,
}

// =============================================================
// Rent reclaim
// =============================================================

/// A zero-balance token account still holding its rent deposit.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmptyAccount {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub token_account: String,
    pub rent: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmptyAccounts {
    pub empty_accounts: Vec<EmptyAccount>,
    pub total_accounts: u32,
    pub total_rent_recoverable: f64,
}

impl EmptyAccounts {
    /// Drop the account for `mint` after it was closed, keeping totals in step.
    ///
    /// Returns `false` when no such account was listed.
    pub fn remove_closed(&mut self, mint: &str) -> bool {
        let Some(index) = self.empty_accounts.iter().position(|a| a.mint == mint) else {
            return false;
        };
        let closed = self.empty_accounts.remove(index);
        self.total_rent_recoverable = (self.total_rent_recoverable - closed.rent).max(0.0);
        self.total_accounts = self.total_accounts.saturating_sub(1);
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CloseAccountRequest {
    pub mint: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CloseReceipt {
    pub signature: String,
    pub mint: String,
    pub operation: String,
}

// =============================================================
// Lenient scalars
// =============================================================

/// Accept a number, a numeric string, or null (as `0.0`).
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("number out of range for f64")),
        Value::String(text) if text.trim().is_empty() => Ok(0.0),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {text:?}"))),
        Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

/// Accept a string or a number, keeping the textual form.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string, got {other}"))),
    }
}
