//! REST API helpers for the wallet backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Transport failures become
//! `ApiError::Network`; everything the backend answered goes through
//! `wire::decode_response` so pages see one error taxonomy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use wire::endpoints;
use wire::types::{
    AssetsPage, AuthPayload, BurnReceipt, BurnRequest, CloseAccountRequest, CloseReceipt, CreateOrderRequest,
    DashboardData, EmptyAccounts, LimitOrder, LoginRequest, OtpRequest, RegisterRequest, SolPrice, TokenOverview,
    TokenPrice, TradeReceipt, TradeRequest, TransactionsPage, TransferReceipt, TransferRequest, TrendingToken,
    UpdateOrderRequest, ValidatedSession, WalletBalance,
};
use wire::{ApiError, AuthBackend, Reply, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    endpoints::url(crate::config::backend_base(), path)
}

#[cfg(any(test, not(feature = "hydrate")))]
fn not_available() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Perform one request and decode the envelope.
async fn call<T, B>(verb: Verb, path: &str, token: Option<&str>, body: Option<&B>) -> Result<Reply<T>, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint(path);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        if let Some(token) = token {
            builder = builder.header("Authorization", &wire::envelope::bearer(token));
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let bytes = response.binary().await.map_err(|e| ApiError::Network(e.to_string()))?;
        wire::decode_response(status, &bytes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, token, body);
        Err(not_available())
    }
}

async fn get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    call::<T, Value>(Verb::Get, path, token, None).await.map(|r| r.data)
}

async fn send<T, B>(verb: Verb, path: &str, token: &str, body: &B) -> Result<Reply<T>, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    call(verb, path, Some(token), Some(body)).await
}

// =============================================================
// Auth
// =============================================================

/// `GET /api/auth/validate-session`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn validate_session(token: &str) -> Result<User, ApiError> {
    get::<ValidatedSession>(endpoints::VALIDATE_SESSION, Some(token)).await.map(|v| v.user)
}

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn login(request: &LoginRequest) -> Result<Reply<AuthPayload>, ApiError> {
    call(Verb::Post, endpoints::LOGIN, None, Some(request)).await
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn register(request: &RegisterRequest) -> Result<Reply<AuthPayload>, ApiError> {
    call(Verb::Post, endpoints::REGISTER, None, Some(request)).await
}

/// `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn logout(token: &str) -> Result<(), ApiError> {
    call::<Value, Value>(Verb::Post, endpoints::LOGOUT, Some(token), None).await.map(|_| ())
}

/// `POST /api/otp/request`; returns the backend's confirmation message.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn request_otp(request: &OtpRequest) -> Result<String, ApiError> {
    call::<Value, _>(Verb::Post, endpoints::OTP_REQUEST, None, Some(request)).await.map(|r| r.message)
}

/// [`AuthBackend`] over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthBackend;

impl AuthBackend for HttpAuthBackend {
    async fn validate_session(&self, token: &str) -> Result<User, ApiError> {
        validate_session(token).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        logout(token).await
    }
}

// =============================================================
// Portfolio
// =============================================================

/// `GET /api/user/dashboard`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn dashboard(token: String) -> Result<DashboardData, ApiError> {
    get(endpoints::DASHBOARD, Some(&token)).await
}

/// `GET /api/user/assets` for the first page of available assets.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn assets(token: String) -> Result<AssetsPage, ApiError> {
    get(&endpoints::assets(1, endpoints::DEFAULT_PAGE_SIZE, "available"), Some(&token)).await
}

/// `GET /api/user/balance`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn balance(token: String) -> Result<WalletBalance, ApiError> {
    get(endpoints::BALANCE, Some(&token)).await
}

/// `GET /api/price/sol` (unauthenticated).
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn sol_price() -> Result<SolPrice, ApiError> {
    get(endpoints::SOL_PRICE, None).await
}

/// `GET /api/price/token?mint=..`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn token_price(token: String, mint: String) -> Result<TokenPrice, ApiError> {
    get(&endpoints::token_price(&mint), Some(&token)).await
}

/// `POST /api/user/transfer`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn transfer(token: String, request: TransferRequest) -> Result<Reply<TransferReceipt>, ApiError> {
    send(Verb::Post, endpoints::TRANSFER, &token, &request).await
}

/// `POST /api/token/burn`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn burn(token: String, request: BurnRequest) -> Result<Reply<BurnReceipt>, ApiError> {
    send(Verb::Post, endpoints::BURN, &token, &request).await
}

/// `GET /api/user/transactions?page=N`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn transactions(token: String, page: u32) -> Result<TransactionsPage, ApiError> {
    get(&endpoints::transactions(page, endpoints::DEFAULT_PAGE_SIZE), Some(&token)).await
}

// =============================================================
// Orders and trades
// =============================================================

/// `GET /api/user/orders` (first page).
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn orders(token: String) -> Result<Vec<LimitOrder>, ApiError> {
    get(&endpoints::orders(1, endpoints::DEFAULT_PAGE_SIZE), Some(&token)).await
}

/// `POST /api/user/orders`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn create_order(token: String, request: CreateOrderRequest) -> Result<Reply<LimitOrder>, ApiError> {
    send(Verb::Post, endpoints::ORDERS, &token, &request).await
}

/// `PUT /api/user/orders/{id}`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn update_order(
    token: String,
    order_id: String,
    request: UpdateOrderRequest,
) -> Result<Reply<LimitOrder>, ApiError> {
    send(Verb::Put, &endpoints::order(&order_id), &token, &request).await
}

/// `DELETE /api/user/orders/{id}`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn delete_order(token: String, order_id: String) -> Result<Reply<Value>, ApiError> {
    call::<Value, Value>(Verb::Delete, &endpoints::order(&order_id), Some(&token), None).await
}

/// `POST /api/user/trade`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn trade(token: String, request: TradeRequest) -> Result<Reply<TradeReceipt>, ApiError> {
    send(Verb::Post, endpoints::TRADE, &token, &request).await
}

// =============================================================
// Token discovery and rent
// =============================================================

/// `GET /api/token/overview/{mint}`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn token_overview(token: String, mint: String) -> Result<TokenOverview, ApiError> {
    get(&endpoints::token_overview(&mint), Some(&token)).await
}

/// `GET /api/user/trending?hour=H`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn trending(token: String, hour: u32) -> Result<Vec<TrendingToken>, ApiError> {
    get(&endpoints::trending(hour, endpoints::DEFAULT_PAGE_SIZE), Some(&token)).await
}

/// `GET /api/token/empty-accounts`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn empty_accounts(token: String) -> Result<EmptyAccounts, ApiError> {
    get(endpoints::EMPTY_ACCOUNTS, Some(&token)).await
}

/// `POST /api/token/close`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport failure.
pub async fn close_account(token: String, mint: String) -> Result<Reply<CloseReceipt>, ApiError> {
    send(Verb::Post, endpoints::CLOSE_ACCOUNT, &token, &CloseAccountRequest { mint }).await
}
