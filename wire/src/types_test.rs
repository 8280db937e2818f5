use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user_json() -> Value {
    serde_json::json!({
        "_id": "u-1",
        "name": "Alice",
        "email": "alice@example.com",
        "wallet": "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin",
        "role": "user",
        "status": "active",
        "createdAt": "2025-01-02T03:04:05.000Z",
        "updatedAt": "2025-01-03T03:04:05.000Z"
    })
}

// =============================================================
// Auth
// =============================================================

#[test]
fn user_reads_mongo_style_id_and_camel_case_dates() {
    let user: User = serde_json::from_value(make_user_json()).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.created_at, "2025-01-02T03:04:05.000Z");
    assert_eq!(user.updated_at, "2025-01-03T03:04:05.000Z");
}

#[test]
fn user_serializes_back_to_backend_field_names() {
    let user: User = serde_json::from_value(make_user_json()).unwrap();
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, make_user_json());
}

#[test]
fn auth_payload_converts_to_session() {
    let payload: AuthPayload =
        serde_json::from_value(serde_json::json!({ "user": make_user_json(), "token": "t-1" })).unwrap();
    let session = Session::from(payload);
    assert_eq!(session.token, "t-1");
    assert_eq!(session.user.name, "Alice");
}

#[test]
fn login_request_omits_absent_otp() {
    let req = LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned(), otp: None };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "email": "a@b.c", "password": "pw" }));
}

#[test]
fn otp_request_uses_type_key() {
    let req = OtpRequest { purpose: OtpPurpose::Register, email: "a@b.c".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "type": "register", "email": "a@b.c" })
    );
}

// =============================================================
// Enums
// =============================================================

#[test]
fn dex_parses_case_insensitively() {
    assert_eq!("Raydium".parse::<Dex>(), Ok(Dex::Raydium));
    assert_eq!(" pumpfun ".parse::<Dex>(), Ok(Dex::Pumpfun));
    assert!("orca".parse::<Dex>().is_err());
}

#[test]
fn dex_default_is_jupiter() {
    assert_eq!(Dex::default(), Dex::Jupiter);
    assert_eq!(Dex::Jupiter.to_string(), "jupiter");
    assert_eq!(Dex::Pumpfun.label(), "PumpFun");
}

#[test]
fn unknown_order_status_does_not_fail_decoding() {
    let status: OrderStatus = serde_json::from_value(serde_json::json!("cancelled")).unwrap();
    assert_eq!(status, OrderStatus::Unknown);
}

// =============================================================
// Paging
// =============================================================

#[test]
fn pagination_accepts_resource_specific_total_names() {
    let page: Pagination = serde_json::from_value(serde_json::json!({
        "currentPage": 2, "totalPages": 3, "totalTransactions": 55, "limit": 20
    }))
    .unwrap();
    assert_eq!(page.total, 55);
    assert!(page.has_next());
    assert!(page.has_previous());
}

#[test]
fn pagination_last_page_has_no_next() {
    let page = Pagination { current_page: 3, total_pages: 3, total: 60, limit: 20 };
    assert!(!page.has_next());
}

// =============================================================
// Transactions
// =============================================================

#[test]
fn transaction_amounts_accept_strings() {
    let tx: Transaction = serde_json::from_value(serde_json::json!({
        "_id": "t-1",
        "signature": "sig",
        "type": "send",
        "amount": "-1.5",
        "value": "",
        "created_at": "2025-02-01T10:00:00Z"
    }))
    .unwrap();
    assert!((tx.amount + 1.5).abs() < f64::EPSILON);
    assert!(tx.value.abs() < f64::EPSILON);
    assert_eq!(tx.kind, "send");
    assert_eq!(tx.created_at, "2025-02-01T10:00:00Z");
}

#[test]
fn transaction_flow_prefers_type_over_sign() {
    let swap = Transaction { kind: "swap".to_owned(), amount: -3.0, ..Transaction::default() };
    let receive = Transaction { kind: "receive".to_owned(), amount: -3.0, ..Transaction::default() };
    let negative = Transaction { kind: "transfer".to_owned(), amount: -3.0, ..Transaction::default() };
    let positive = Transaction { kind: "transfer".to_owned(), amount: 3.0, ..Transaction::default() };
    assert_eq!(swap.flow(), TransactionFlow::Swap);
    assert_eq!(receive.flow(), TransactionFlow::Incoming);
    assert_eq!(negative.flow(), TransactionFlow::Outgoing);
    assert_eq!(positive.flow(), TransactionFlow::Incoming);
    assert_eq!(Transaction::default().flow(), TransactionFlow::Other);
}

#[test]
fn transaction_amount_rejects_garbage() {
    let result = serde_json::from_value::<Transaction>(serde_json::json!({ "amount": "lots" }));
    assert!(result.is_err());
}

// =============================================================
// Orders and trades
// =============================================================

#[test]
fn limit_order_decodes_enums() {
    let order: LimitOrder = serde_json::from_value(serde_json::json!({
        "_id": "o-1",
        "mint": "m",
        "orderType": "low",
        "type": "sell",
        "status": "triggered",
        "triggerPrice": 0.5,
        "signature": null
    }))
    .unwrap();
    assert_eq!(order.order_type, OrderType::Low);
    assert_eq!(order.side, TradeSide::Sell);
    assert_eq!(order.status, OrderStatus::Triggered);
    assert_eq!(order.signature, None);
}

#[test]
fn create_order_request_uses_snake_case_wire_names() {
    let req = CreateOrderRequest {
        mint: "m".to_owned(),
        amount: 1.0,
        dex: Dex::Jupiter,
        order_type: OrderType::High,
        trigger_price: 0.25,
        slippage: 10.0,
        tip: 0.001,
        side: TradeSide::Buy,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "mint": "m",
            "amount": 1.0,
            "dex": "jupiter",
            "order_type": "high",
            "trigger_price": 0.25,
            "slippage": 10.0,
            "tip": 0.001,
            "type": "buy"
        })
    );
}

#[test]
fn trade_request_skips_unset_tip_and_slippage() {
    let req = TradeRequest {
        mint: "m".to_owned(),
        amount: 0.1,
        dex: Dex::Raydium,
        tip: None,
        slippage: None,
        side: TradeSide::Sell,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "mint": "m", "amount": 0.1, "dex": "raydium", "type": "sell" })
    );
}

// =============================================================
// Token overview
// =============================================================

#[test]
fn token_overview_keeps_numeric_fields_as_text() {
    let overview: TokenOverview = serde_json::from_value(serde_json::json!({
        "ca": "mint",
        "decimals": 6,
        "supply": "1000000000",
        "marketCap": 12345.5,
        "isToken2022": true,
        "creators": [{ "address": "c", "verified": true, "share": 100 }]
    }))
    .unwrap();
    assert_eq!(overview.decimals, "6");
    assert_eq!(overview.supply, "1000000000");
    assert_eq!(overview.market_cap, "12345.5");
    assert!(overview.is_token2022);
    assert_eq!(overview.creators[0].share, "100");
}

// =============================================================
// Rent reclaim
// =============================================================

fn make_empty_accounts() -> EmptyAccounts {
    EmptyAccounts {
        empty_accounts: vec![
            EmptyAccount { mint: "a".to_owned(), rent: 0.002, ..EmptyAccount::default() },
            EmptyAccount { mint: "b".to_owned(), rent: 0.003, ..EmptyAccount::default() },
        ],
        total_accounts: 2,
        total_rent_recoverable: 0.005,
    }
}

#[test]
fn remove_closed_drops_row_and_rent() {
    let mut accounts = make_empty_accounts();
    assert!(accounts.remove_closed("a"));
    assert_eq!(accounts.empty_accounts.len(), 1);
    assert_eq!(accounts.empty_accounts[0].mint, "b");
    assert_eq!(accounts.total_accounts, 1);
    assert!((accounts.total_rent_recoverable - 0.003).abs() < 1e-12);
}

#[test]
fn remove_closed_unknown_mint_is_noop() {
    let mut accounts = make_empty_accounts();
    assert!(!accounts.remove_closed("zzz"));
    assert_eq!(accounts, make_empty_accounts());
}

#[test]
fn remove_closed_never_goes_negative() {
    let mut accounts = make_empty_accounts();
    accounts.total_rent_recoverable = 0.001;
    assert!(accounts.remove_closed("b"));
    assert!(accounts.total_rent_recoverable.abs() < f64::EPSILON);
}

#[test]
fn dashboard_accepts_legacy_section_names() {
    let data: DashboardData = serde_json::from_value(serde_json::json!({
        "account": { "walletAddress": "W", "accountStatus": "active" },
        "trading": { "totalTransactions": 4, "successRate": 75.0 },
        "recent": { "transactionBreakdown": { "sends": 1, "receives": 2, "swaps": 1 } },
        "performance": { "topGainers": [{ "symbol": "BONK", "profitLossPercent": 12.5 }], "topLosers": [] },
        "system": { "solPrice": 150.0 }
    }))
    .unwrap();
    assert_eq!(data.user_info.wallet_address, "W");
    assert_eq!(data.transactions.total_transactions, 4);
    assert_eq!(data.recent_activity.activity_breakdown.receives, 2);
    assert_eq!(data.performance.top_performers[0].symbol, "BONK");
    assert!((data.market_data.sol_price - 150.0).abs() < f64::EPSILON);
}
