//! Market buy/sell of a single token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Other pages link here with the token and terms in the query string (see
//! `util::trade_links`). The token's identity and spot price are looked up
//! whenever the mint changes; together with the polled SOL price they drive
//! the output estimate shown under the amount field.

#[cfg(test)]
#[path = "trading_test.rs"]
mod trading_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use wire::format;
use wire::types::{Dex, TokenPrice, TradeReceipt, TradeRequest, TradeSide};

use crate::components::protected_page::ProtectedPage;
use crate::components::receipt_dialog::{Receipt, ReceiptDialog};
use crate::state::auth::AuthState;
use crate::state::query::{run_mutation, use_polled};
use crate::state::toast::{ToastState, notify_failure};
use crate::util::forms::{non_negative, positive, required};
use crate::util::trade_links::TradePrefill;

type Invalid = (&'static str, &'static str);

const MISSING_FIELDS_HINT: &str = "Fields marked * are required.";

/// Trading form as typed; `dex` stays unset until chosen or prefilled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeForm {
    pub side: TradeSide,
    pub mint: String,
    pub amount: String,
    pub dex: Option<Dex>,
    pub tip: String,
    pub slippage: String,
}

impl TradeForm {
    pub fn from_prefill(prefill: &TradePrefill, dex_given: bool) -> Self {
        Self {
            side: prefill.side,
            mint: prefill.mint.clone(),
            amount: String::new(),
            dex: dex_given.then_some(prefill.dex),
            tip: prefill.jito_tip.map(|t| t.to_string()).unwrap_or_default(),
            slippage: prefill.slippage.map(|s| s.to_string()).unwrap_or_default(),
        }
    }

    /// Form state from the page query; an unknown `dex` leaves the venue unset.
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Self {
        let dex_given = get("dex").is_some_and(|d| d.parse::<Dex>().is_ok());
        Self::from_prefill(&TradePrefill::from_query(&get), dex_given)
    }

    /// Mint, amount and dex are required; tip and slippage are optional.
    pub fn to_request(&self) -> Result<TradeRequest, Invalid> {
        let (Some(mint), Some(_), Some(dex)) = (required(&self.mint), required(&self.amount), self.dex) else {
            return Err(("Missing Fields", "Please fill in all required fields"));
        };
        let amount = positive(&self.amount).ok_or(("Invalid Amount", "Amount must be greater than zero"))?;
        let tip = optional_number(&self.tip)?;
        let slippage = optional_number(&self.slippage)?;
        Ok(TradeRequest { mint, amount, dex, tip, slippage, side: self.side })
    }
}

fn optional_number(raw: &str) -> Result<Option<f64>, Invalid> {
    if required(raw).is_none() {
        return Ok(None);
    }
    non_negative(raw).map(Some).ok_or(("Invalid Values", "Tip and slippage cannot be negative"))
}

/// Shown when the price lookup fails for a manually entered mint.
pub fn placeholder_token(mint: &str) -> TokenPrice {
    let prefix: String = mint.chars().take(8).collect();
    TokenPrice {
        mint: mint.to_owned(),
        name: format!("Token {prefix}..."),
        symbol: "UNKNOWN".to_owned(),
        logo: String::new(),
        price_in_usd: None,
    }
}

/// Expected output: tokens received for a buy (amount in SOL), SOL received
/// for a sell (amount in tokens). `None` until both prices are known.
pub fn estimate(side: TradeSide, amount: f64, token_usd: f64, sol_usd: f64) -> Option<f64> {
    if !(amount > 0.0 && token_usd > 0.0 && sol_usd > 0.0) {
        return None;
    }
    Some(match side {
        TradeSide::Buy => amount * sol_usd / token_usd,
        TradeSide::Sell => amount * token_usd / sol_usd,
    })
}

pub fn trade_receipt(message: String, receipt: TradeReceipt, symbol: &str) -> Receipt {
    let side = match receipt.side {
        TradeSide::Buy => "Buy",
        TradeSide::Sell => "Sell",
    };
    Receipt {
        title: "Trade Executed".to_owned(),
        message,
        details: vec![
            ("Type", side.to_owned()),
            ("Amount", format!("{} {symbol}", format::trim_decimal(receipt.amount, 9))),
            ("Price", format!("${}", format::price(receipt.price))),
        ],
        signature: receipt.signature,
    }
}

#[component]
pub fn TradingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_query_map();

    let form = RwSignal::new(params.with_untracked(|q| {
        TradeForm::from_query(|key| q.get(key))
    }));
    let token_info = RwSignal::new(None::<TokenPrice>);
    let sol_price = use_polled(crate::config::SOL_PRICE_POLL, crate::net::api::sol_price);
    let receipt = RwSignal::new(None::<Receipt>);
    let busy = RwSignal::new(false);
    let counter = RwSignal::new(0_u64);

    let mint = Memo::new(move |_| form.with(|f| f.mint.trim().to_owned()));

    // Look the token up whenever the mint (or the session) changes.
    Effect::new(move || {
        let mint = mint.get();
        let Some(token) = auth.with(|a| a.token().map(str::to_owned)) else {
            return;
        };
        token_info.set(None);
        if mint.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let info = match crate::net::api::token_price(token, mint.clone()).await {
                Ok(info) => info,
                Err(e) => {
                    log::warn!("token lookup failed for {mint}: {e}");
                    placeholder_token(&mint)
                }
            };
            if form.with_untracked(|f| f.mint.trim() == mint) {
                token_info.set(Some(info));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let estimate_text = move || {
        let (side, amount) = form.with(|f| (f.side, positive(&f.amount)));
        let token_usd = token_info.with(|t| t.as_ref().and_then(|t| t.price_in_usd));
        let sol_usd = sol_price.with(|p| p.as_ref().map(|p| p.sol_price_usd));
        let value = estimate(side, amount?, token_usd?, sol_usd?)?;
        let unit = match side {
            TradeSide::Buy => token_info.with(|t| t.as_ref().map(|t| t.symbol.clone())).unwrap_or_default(),
            TradeSide::Sell => "SOL".to_owned(),
        };
        Some(format!("≈ {} {unit}", format::trim_decimal(value, 6)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(TradeForm::to_request) {
            Ok(request) => request,
            Err((title, description)) => {
                notify_failure(toasts, title, description);
                return;
            }
        };
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };
        let symbol = token_info.with_untracked(|t| t.as_ref().map(|t| t.symbol.clone())).unwrap_or_default();
        run_mutation(busy, toasts, counter, "Trade Failed", crate::net::api::trade(token, request), move |reply| {
            receipt.set(Some(trade_receipt(reply.message, reply.data, &symbol)));
            form.update(|f| f.amount.clear());
        });
    };

    let side_button = move |side: TradeSide, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || if form.with(|f| f.side == side) { "tab tab--active" } else { "tab" }
                on:click=move |_| form.update(|f| f.side = side)
            >
                {label}
            </button>
        }
    };

    view! {
        <ProtectedPage title="Trading Menu" subtitle="Buy and sell Solana tokens">
            <form class="card trade-form" on:submit=on_submit>
                <div class="tabs">
                    {side_button(TradeSide::Buy, "Buy")}
                    {side_button(TradeSide::Sell, "Sell")}
                </div>

                <label class="dialog__label" for="mint">"Token Mint *"</label>
                <input
                    id="mint"
                    class="input mono"
                    type="text"
                    placeholder="Token mint address"
                    prop:value=move || form.with(|f| f.mint.clone())
                    on:change=move |ev| form.update(|f| f.mint = event_target_value(&ev))
                />
                {move || token_info.get().map(|info| view! {
                    <div class="token-chip">
                        <img class="token-logo" src=info.logo alt=""/>
                        <span>{info.name}</span>
                        <small>{info.symbol}</small>
                        <span class="token-chip__price">
                            {info.price_in_usd.map(|p| format!("${}", format::price(p))).unwrap_or_default()}
                        </span>
                    </div>
                })}

                <label class="dialog__label" for="amount">
                    {move || if form.with(|f| f.side == TradeSide::Buy) { "Amount (SOL) *" } else { "Amount (tokens) *" }}
                </label>
                <input
                    id="amount"
                    class="input"
                    type="number"
                    step="any"
                    min="0"
                    placeholder="0.0"
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                />
                <p class="trade-form__estimate">{estimate_text}</p>

                <label class="dialog__label" for="dex">"DEX *"</label>
                <select
                    id="dex"
                    class="input"
                    on:change=move |ev| form.update(|f| f.dex = event_target_value(&ev).parse().ok())
                >
                    <option value="" selected=move || form.with(|f| f.dex.is_none())>"Select DEX"</option>
                    {Dex::ALL
                        .into_iter()
                        .map(|dex| view! {
                            <option value=dex.as_str() selected=move || form.with(|f| f.dex == Some(dex))>{dex.label()}</option>
                        })
                        .collect::<Vec<_>>()}
                </select>

                <label class="dialog__label" for="slippage">"Slippage (%)"</label>
                <input
                    id="slippage"
                    class="input"
                    type="number"
                    step="any"
                    min="0"
                    placeholder="Default"
                    prop:value=move || form.with(|f| f.slippage.clone())
                    on:input=move |ev| form.update(|f| f.slippage = event_target_value(&ev))
                />
                <label class="dialog__label" for="tip">"Jito Tip (SOL)"</label>
                <input
                    id="tip"
                    class="input"
                    type="number"
                    step="any"
                    min="0"
                    placeholder="Default"
                    prop:value=move || form.with(|f| f.tip.clone())
                    on:input=move |ev| form.update(|f| f.tip = event_target_value(&ev))
                />

                <button class="btn btn--primary trade-form__submit" type="submit" disabled=move || busy.get()>
                    {move || match (busy.get(), form.with(|f| f.side)) {
                        (true, _) => "Processing...",
                        (false, TradeSide::Buy) => "Buy",
                        (false, TradeSide::Sell) => "Sell",
                    }}
                </button>
                <p class="page__footnote">{MISSING_FIELDS_HINT}</p>
            </form>

            {move || receipt.get().map(|done| view! {
                <ReceiptDialog receipt=done on_close=Callback::new(move |()| receipt.set(None))/>
            })}
        </ProtectedPage>
    }
}
