//! Tokens with the most buy/sell flow over a rolling window.

#[cfg(test)]
#[path = "trending_test.rs"]
mod trending_test;

use leptos::prelude::*;
use wire::endpoints::TRENDING_WINDOWS;
use wire::format;
use wire::types::{TradeSide, TrendingToken};

use crate::components::protected_page::ProtectedPage;
use crate::components::view_status::ViewStatus;
use crate::state::auth::AuthState;
use crate::state::query::{refresh, use_authed_query};
use crate::state::toast::ToastState;
use crate::util::trade_links::TradePrefill;

pub const DEFAULT_WINDOW: u32 = 24;

pub fn window_label(hour: u32) -> String {
    format!("{hour}H")
}

/// Buy volume share of total volume, in percent.
pub fn buy_pressure(token: &TrendingToken) -> Option<f64> {
    let total = token.buy_volume_usd + token.sell_volume_usd;
    (total > 0.0).then(|| token.buy_volume_usd / total * 100.0)
}

#[component]
pub fn TrendingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let counter = RwSignal::new(0_u64);
    let hour = RwSignal::new(DEFAULT_WINDOW);

    let query = use_authed_query(auth, counter, move |token| crate::net::api::trending(token, hour.get_untracked()));
    let status = Signal::derive(move || query.with(|q| q.view_state(Vec::is_empty)));

    let select = move |window: u32| {
        if hour.get_untracked() != window {
            hour.set(window);
            refresh(counter);
        }
    };

    view! {
        <ProtectedPage title="Trending" subtitle="Most traded tokens right now">
            <div class="tabs">
                {TRENDING_WINDOWS
                    .into_iter()
                    .map(|window| view! {
                        <button
                            class=move || if hour.get() == window { "tab tab--active" } else { "tab" }
                            on:click=move |_| select(window)
                        >
                            {window_label(window)}
                        </button>
                    })
                    .collect::<Vec<_>>()}
            </div>
            <ViewStatus state=status empty_text="No trending tokens in this window." on_retry=Callback::new(move |()| refresh(counter))/>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Token"</th>
                        <th>"Price"</th>
                        <th>"Buy Volume"</th>
                        <th>"Sell Volume"</th>
                        <th>"Net Inflow"</th>
                        <th>"Buy Pressure"</th>
                        <th>"Trade"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || query.with(|q| q.ready().cloned().unwrap_or_default())
                        key=|token| token.mint.clone()
                        children=move |token| trending_row(token, toasts)
                    />
                </tbody>
            </table>
        </ProtectedPage>
    }
}

fn trending_row(token: TrendingToken, toasts: RwSignal<ToastState>) -> impl IntoView {
    let buy = TradePrefill::trending(&token.mint, TradeSide::Buy).href();
    let sell = TradePrefill::trending(&token.mint, TradeSide::Sell).href();
    let pressure = buy_pressure(&token).map(|p| format!("{p:.1}%")).unwrap_or_else(|| "-".to_owned());
    let inflow_class = if token.net_inflow_usd < 0.0 { "text-down" } else { "text-up" };
    let mint = token.mint.clone();

    view! {
        <tr>
            <td class="token-cell">
                <img class="token-logo" src=token.logo alt=""/>
                <span>{token.name}</span>
                <small>{token.symbol}</small>
                <button
                    class="btn btn--ghost btn--small mono"
                    title="Copy mint address"
                    on:click=move |_| crate::util::clipboard::copy_text(mint.clone(), "Mint address", toasts)
                >
                    {format::short_address(&token.mint)}
                </button>
            </td>
            <td>{format!("${}", format::price(token.latest_price))}</td>
            <td>{format::compact_usd(token.buy_volume_usd)}</td>
            <td>{format::compact_usd(token.sell_volume_usd)}</td>
            <td class=inflow_class>{format::compact_usd(token.net_inflow_usd)}</td>
            <td>{pressure}</td>
            <td class="table__actions">
                <a class="btn btn--small btn--buy" href=buy>"Buy"</a>
                <a class="btn btn--small btn--sell" href=sell>"Sell"</a>
            </td>
        </tr>
    }
}
