//! Portfolio dashboard: account, balances, activity and performers.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use wire::format;
use wire::types::{Asset, DashboardData, Holding, LimitOrder, Transaction};

use crate::components::protected_page::ProtectedPage;
use crate::components::view_status::ViewStatus;
use crate::state::auth::AuthState;
use crate::state::query::{refresh, use_authed_query};

/// Up/down colouring for profit, loss and signed amounts.
pub fn trend_class(value: f64) -> &'static str {
    if value < 0.0 { "text-down" } else { "text-up" }
}

/// Signed amount with an explicit `+` for non-negative values.
pub fn signed_amount(amount: f64) -> String {
    let body = format::trim_decimal(amount.abs(), 6);
    if amount < 0.0 { format!("-{body}") } else { format!("+{body}") }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let counter = RwSignal::new(0_u64);
    let query = use_authed_query(auth, counter, crate::net::api::dashboard);
    let status = Signal::derive(move || query.with(|q| q.view_state(|_| false)));

    let greeting = move || format!("Welcome back, {}", auth.get().display_name());

    view! {
        <ProtectedPage title="Dashboard" subtitle="Overview of your wallet and trading activity">
            <p class="page__greeting">{greeting}</p>
            <ViewStatus state=status empty_text="No dashboard data." on_retry=Callback::new(move |()| refresh(counter))/>
            {move || query.with(|q| q.ready().cloned()).map(dashboard_body)}
        </ProtectedPage>
    }
}

fn dashboard_body(data: DashboardData) -> impl IntoView {
    let DashboardData { user_info, portfolio, transactions, orders, recent_activity, performance, market_data } = data;

    view! {
        <section class="card account-card">
            <div>
                <span class="stat__label">"Wallet"</span>
                <code class="mono">{user_info.wallet_address.clone()}</code>
            </div>
            <div>
                <span class="stat__label">"Member since"</span>
                <span>{format::date(&user_info.member_since)}</span>
            </div>
            <div>
                <span class="stat__label">"Status"</span>
                <span class="badge">{user_info.account_status}</span>
            </div>
        </section>

        <section class="stat-grid">
            <Stat label="Portfolio Value" value=format::usd(portfolio.total_portfolio_value)/>
            <Stat label="Token Value" value=format::usd(portfolio.total_value)/>
            <Stat label="SOL Balance" value=format!("{:.4} SOL", portfolio.sol_balance)/>
            <Stat label="SOL Value" value=format::usd(portfolio.sol_value_usd)/>
            <div class="card stat">
                <span class="stat__label">"Profit / Loss"</span>
                <span class=format!("stat__value {}", trend_class(portfolio.total_profit_loss))>
                    {format::usd(portfolio.total_profit_loss)}
                </span>
                <span class=trend_class(portfolio.profit_loss_percent)>
                    {format::percent_change(portfolio.profit_loss_percent)}
                </span>
            </div>
            <Stat label="Invested" value=format::usd(portfolio.total_invested)/>
            <Stat label="Assets" value=portfolio.total_assets.to_string()/>
            <Stat label="SOL Price" value=format::usd(market_data.sol_price)/>
        </section>

        <section class="stat-grid">
            <Stat label="Transactions" value=transactions.total_transactions.to_string()/>
            <Stat label="Volume" value=format::usd(transactions.total_volume)/>
            <Stat label="Avg. Transaction" value=format::usd(transactions.avg_transaction_value)/>
            <Stat label="Success Rate" value=format!("{:.1}%", transactions.success_rate)/>
            <Stat label="Orders" value=orders.total_orders.to_string()/>
            <Stat label="Waiting / Triggered" value=format!("{} / {}", orders.waiting_orders, orders.triggered_orders)/>
            <Stat label="Buy / Sell Orders" value=format!("{} / {}", orders.buy_orders, orders.sell_orders)/>
            <Stat label="Order Value" value=format::usd(orders.total_order_value)/>
        </section>

        <section class="dashboard-grid">
            <div class="card">
                <h2>"Recent Assets"</h2>
                {recent_list(recent_activity.assets, "No assets yet.", asset_row)}
                <a class="link" href="/assets">"View all assets"</a>
            </div>
            <div class="card">
                <h2>"Recent Transactions"</h2>
                {recent_list(recent_activity.transactions, "No transactions yet.", transaction_row)}
                <a class="link" href="/transactions">"View all transactions"</a>
            </div>
            <div class="card">
                <h2>"Recent Orders"</h2>
                {recent_list(recent_activity.orders, "No orders yet.", order_row)}
                <a class="link" href="/limit-orders">"Manage orders"</a>
            </div>
        </section>

        <section class="dashboard-grid">
            <div class="card">
                <h2>"Top Performers"</h2>
                {recent_list(performance.top_performers, "No data.", holding_row)}
            </div>
            <div class="card">
                <h2>"Worst Performers"</h2>
                {recent_list(performance.worst_performers, "No data.", holding_row)}
            </div>
        </section>

        <p class="page__footnote">"Prices updated " {format::date_time(&market_data.price_last_updated)}</p>
    }
}

#[component]
fn Stat(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="card stat">
            <span class="stat__label">{label}</span>
            <span class="stat__value">{value}</span>
        </div>
    }
}

fn recent_list<T, V>(items: Vec<T>, empty: &'static str, row: impl Fn(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    if items.is_empty() {
        return view! { <p class="view-status view-status--empty">{empty}</p> }.into_any();
    }
    view! { <ul class="row-list">{items.into_iter().map(row).collect::<Vec<_>>()}</ul> }.into_any()
}

fn asset_row(asset: Asset) -> impl IntoView {
    view! {
        <li class="row">
            <img class="token-logo" src=asset.logo alt=""/>
            <span class="row__main">{asset.name} " " <small>{asset.symbol}</small></span>
            <span>{format::grouped(asset.balance, 4)}</span>
            <span>{format::usd(asset.current_value)}</span>
        </li>
    }
}

fn transaction_row(tx: Transaction) -> impl IntoView {
    view! {
        <li class="row">
            <img class="token-logo" src=tx.logo alt=""/>
            <span class="row__main">{tx.symbol} " " <small>{tx.kind}</small></span>
            <span class=trend_class(tx.amount)>{signed_amount(tx.amount)}</span>
            <a class="link mono" href=format::solscan_tx(&tx.signature) target="_blank" rel="noopener noreferrer">
                {format::short_address(&tx.signature)}
            </a>
        </li>
    }
}

fn order_row(order: LimitOrder) -> impl IntoView {
    view! {
        <li class="row">
            <img class="token-logo" src=order.logo alt=""/>
            <span class="row__main">{order.symbol} " " <small>{order.side.as_str()}</small></span>
            <span>{format!("{} @ {}", order.order_type.as_str(), format::price(order.trigger_price))}</span>
            <span class="badge">{order.status.as_str()}</span>
        </li>
    }
}

fn holding_row(holding: Holding) -> impl IntoView {
    view! {
        <li class="row">
            <img class="token-logo" src=holding.logo alt=""/>
            <span class="row__main">{holding.symbol}</span>
            <span>{format::usd(holding.current_value)}</span>
            <span class=trend_class(holding.profit_loss_percent)>{format::percent_change(holding.profit_loss_percent)}</span>
        </li>
    }
}
