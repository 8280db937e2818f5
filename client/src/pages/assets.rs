//! Wallet balance and token holdings with transfer and burn actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The asset list and wallet balance share one refresh counter, so a
//! successful transfer or burn re-fetches both. The SOL price is polled on
//! its own schedule for the USD estimate of the wallet balance.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use leptos::prelude::*;
use wire::format;
use wire::types::{Asset, BurnReceipt, BurnRequest, TradeSide, TransferReceipt, TransferRequest, WRAPPED_SOL_MINT};

use crate::components::protected_page::ProtectedPage;
use crate::components::receipt_dialog::{Receipt, ReceiptDialog};
use crate::components::view_status::ViewStatus;
use crate::state::auth::AuthState;
use crate::state::query::{refresh, run_mutation, use_authed_query, use_polled};
use crate::state::toast::{ToastState, notify_failure};
use crate::util::forms::{MISSING_FIELDS, fraction_of, positive, required};
use crate::util::trade_links::TradePrefill;

/// Percent shortcuts offered when transferring.
pub const TRANSFER_SHORTCUTS: [u8; 4] = [25, 50, 75, 95];
/// Percent shortcuts offered when burning.
pub const BURN_SHORTCUTS: [u8; 6] = [1, 5, 10, 25, 50, 100];

type Invalid = (&'static str, &'static str);

/// Dialog currently open on the page.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Transfer(Asset),
    SendSol,
    Burn(Asset),
}

/// A validated mutation ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum Prepared {
    Transfer { request: TransferRequest, symbol: String },
    Burn { request: BurnRequest, symbol: String },
}

impl Prepared {
    pub fn failure_title(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "Transfer Failed",
            Self::Burn { .. } => "Burn Failed",
        }
    }
}

impl Action {
    pub fn title(&self) -> String {
        match self {
            Self::Transfer(asset) => format!("Transfer {}", asset.symbol),
            Self::SendSol => "Send SOL".to_owned(),
            Self::Burn(asset) => format!("Burn {}", asset.symbol),
        }
    }

    pub fn symbol(&self) -> String {
        match self {
            Self::Transfer(asset) | Self::Burn(asset) => asset.symbol.clone(),
            Self::SendSol => "SOL".to_owned(),
        }
    }

    pub fn needs_recipient(&self) -> bool {
        !matches!(self, Self::Burn(_))
    }

    pub fn shortcuts(&self) -> &'static [u8] {
        match self {
            Self::Burn(_) => &BURN_SHORTCUTS,
            Self::Transfer(_) | Self::SendSol => &TRANSFER_SHORTCUTS,
        }
    }

    /// Amount the percent shortcuts are taken of.
    pub fn available(&self, sol_balance: f64) -> f64 {
        match self {
            Self::Transfer(asset) | Self::Burn(asset) => asset.balance,
            Self::SendSol => sol_balance,
        }
    }

    /// Validate the dialog inputs into a request.
    pub fn prepare(&self, amount: &str, recipient: &str) -> Result<Prepared, Invalid> {
        if required(amount).is_none() || (self.needs_recipient() && required(recipient).is_none()) {
            return Err(("Missing Fields", MISSING_FIELDS));
        }
        let amount = positive(amount).ok_or(("Invalid Amount", "Amount must be greater than zero"))?;
        let to = recipient.trim().to_owned();
        Ok(match self {
            Self::Transfer(asset) => Prepared::Transfer {
                request: TransferRequest { mint: asset.mint.clone(), amount, to },
                symbol: asset.symbol.clone(),
            },
            Self::SendSol => Prepared::Transfer {
                request: TransferRequest { mint: WRAPPED_SOL_MINT.to_owned(), amount, to },
                symbol: "SOL".to_owned(),
            },
            Self::Burn(asset) => Prepared::Burn {
                request: BurnRequest { mint: asset.mint.clone(), amount },
                symbol: asset.symbol.clone(),
            },
        })
    }
}

pub fn transfer_receipt(message: String, receipt: TransferReceipt, symbol: &str) -> Receipt {
    Receipt {
        title: "Transfer Complete".to_owned(),
        message,
        details: vec![
            ("Amount", format!("{} {symbol}", format::trim_decimal(receipt.amount, 9))),
            ("To", receipt.to),
            ("Status", receipt.status),
        ],
        signature: receipt.signature,
    }
}

pub fn burn_receipt(message: String, receipt: BurnReceipt, symbol: &str) -> Receipt {
    Receipt {
        title: "Burn Complete".to_owned(),
        message,
        details: vec![("Burned", format!("{} {symbol}", format::trim_decimal(receipt.amount, 9)))],
        signature: receipt.signature,
    }
}

#[component]
pub fn AssetsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let counter = RwSignal::new(0_u64);

    let assets = use_authed_query(auth, counter, crate::net::api::assets);
    let balance = use_authed_query(auth, counter, crate::net::api::balance);
    let sol_price = use_polled(crate::config::SOL_PRICE_POLL, crate::net::api::sol_price);

    let action = RwSignal::new(None::<Action>);
    let receipt = RwSignal::new(None::<Receipt>);
    let busy = RwSignal::new(false);

    let sol_balance = move || balance.with(|q| q.ready().map(|b| b.balance)).unwrap_or_default();
    let sol_usd = move || {
        sol_price.with(|p| p.as_ref().map(|p| format::usd(sol_balance() * p.sol_price_usd))).unwrap_or_default()
    };
    let status = Signal::derive(move || assets.with(|q| q.view_state(|page| page.assets.is_empty())));

    let on_submit = Callback::new(move |(amount, recipient): (String, String)| {
        if busy.get_untracked() {
            return;
        }
        let Some(current) = action.get_untracked() else {
            return;
        };
        let prepared = match current.prepare(&amount, &recipient) {
            Ok(prepared) => prepared,
            Err((title, description)) => {
                notify_failure(toasts, title, description);
                return;
            }
        };
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };
        let failure_title = prepared.failure_title();
        match prepared {
            Prepared::Transfer { request, symbol } => {
                run_mutation(busy, toasts, counter, failure_title, crate::net::api::transfer(token, request), move |reply| {
                    action.set(None);
                    receipt.set(Some(transfer_receipt(reply.message, reply.data, &symbol)));
                });
            }
            Prepared::Burn { request, symbol } => {
                run_mutation(busy, toasts, counter, failure_title, crate::net::api::burn(token, request), move |reply| {
                    action.set(None);
                    receipt.set(Some(burn_receipt(reply.message, reply.data, &symbol)));
                });
            }
        }
    });

    view! {
        <ProtectedPage title="My Assets" subtitle="Manage your tokens and wallet">
            <section class="card wallet-card">
                <div>
                    <span class="stat__label">"Wallet Address"</span>
                    <div class="wallet-card__address">
                        <code class="mono">
                            {move || balance.with(|q| q.ready().map(|b| b.wallet_address.clone())).unwrap_or_default()}
                        </code>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| {
                                if let Some(address) = balance.with_untracked(|q| q.ready().map(|b| b.wallet_address.clone())) {
                                    crate::util::clipboard::copy_text(address, "Wallet address", toasts);
                                }
                            }
                        >
                            "Copy"
                        </button>
                    </div>
                </div>
                <div>
                    <span class="stat__label">"SOL Balance"</span>
                    <span class="stat__value">{move || format!("{} SOL", format::trim_decimal(sol_balance(), 9))}</span>
                    <span class="stat__hint">{sol_usd}</span>
                </div>
                <div>
                    <span class="stat__label">"SOL Price"</span>
                    <span class="stat__value">
                        {move || sol_price.with(|p| p.as_ref().map(|p| format::usd(p.sol_price_usd))).unwrap_or_else(|| "...".to_owned())}
                    </span>
                </div>
                <button class="btn btn--primary" on:click=move |_| action.set(Some(Action::SendSol))>"Send SOL"</button>
            </section>

            {move || {
                assets.with(|q| q.ready().map(|page| page.summary.clone())).map(|summary| view! {
                    <section class="stat-grid">
                        <div class="card stat">
                            <span class="stat__label">"Total Value"</span>
                            <span class="stat__value">{format::usd(summary.total_value)}</span>
                        </div>
                        <div class="card stat">
                            <span class="stat__label">"Assets"</span>
                            <span class="stat__value">{summary.total_assets}</span>
                        </div>
                    </section>
                })
            }}

            <ViewStatus state=status empty_text="No assets found." on_retry=Callback::new(move |()| refresh(counter))/>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Token"</th>
                        <th>"Balance"</th>
                        <th>"Price"</th>
                        <th>"Value"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || assets.with(|q| q.ready().map(|page| page.assets.clone()).unwrap_or_default())
                        key=|asset| asset.mint.clone()
                        children=move |asset| asset_row(asset, action)
                    />
                </tbody>
            </table>

            {move || action.get().map(|current| view! {
                <AmountDialog
                    title=current.title()
                    symbol=current.symbol()
                    available=current.available(sol_balance())
                    with_recipient=current.needs_recipient()
                    shortcuts=current.shortcuts()
                    busy=busy
                    on_cancel=Callback::new(move |()| action.set(None))
                    on_submit=on_submit
                />
            })}
            {move || receipt.get().map(|done| view! {
                <ReceiptDialog receipt=done on_close=Callback::new(move |()| receipt.set(None))/>
            })}
        </ProtectedPage>
    }
}

fn asset_row(asset: Asset, action: RwSignal<Option<Action>>) -> impl IntoView {
    let buy = TradePrefill::new(&asset.mint, TradeSide::Buy).href();
    let sell = TradePrefill::new(&asset.mint, TradeSide::Sell).href();
    let for_transfer = asset.clone();
    let for_burn = asset.clone();

    view! {
        <tr>
            <td class="token-cell">
                <img class="token-logo" src=asset.logo alt=""/>
                <span>{asset.name}</span>
                <small>{asset.symbol}</small>
            </td>
            <td>{format::grouped(asset.balance, 4)}</td>
            <td>{format::usd(asset.current_price)}</td>
            <td>{format::usd(asset.current_value)}</td>
            <td class="table__actions">
                <a class="btn btn--small btn--buy" href=buy>"Buy"</a>
                <a class="btn btn--small btn--sell" href=sell>"Sell"</a>
                <button class="btn btn--small" on:click=move |_| action.set(Some(Action::Transfer(for_transfer.clone())))>
                    "Transfer"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| action.set(Some(Action::Burn(for_burn.clone())))>
                    "Burn"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn AmountDialog(
    title: String,
    symbol: String,
    available: f64,
    with_recipient: bool,
    shortcuts: &'static [u8],
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let amount = RwSignal::new(String::new());
    let recipient = RwSignal::new(String::new());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__hint">
                    {format!("Available: {} {symbol}", format::trim_decimal(available, 9))}
                </p>
                <Show when=move || with_recipient>
                    <label class="dialog__label">"Recipient address"</label>
                    <div class="auth-form__row">
                        <input
                            class="input mono"
                            type="text"
                            placeholder="Wallet address"
                            prop:value=move || recipient.get()
                            on:input=move |ev| recipient.set(event_target_value(&ev))
                        />
                        <button class="btn btn--ghost" type="button" on:click=move |_| crate::util::clipboard::paste_into(recipient, toasts)>
                            "Paste"
                        </button>
                    </div>
                </Show>
                <label class="dialog__label">"Amount"</label>
                <input
                    class="input"
                    type="number"
                    step="any"
                    min="0"
                    placeholder="0.0"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <div class="dialog__shortcuts">
                    {shortcuts
                        .iter()
                        .map(|&percent| view! {
                            <button class="btn btn--small" type="button" on:click=move |_| amount.set(fraction_of(available, percent))>
                                {format!("{percent}%")}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_submit.run((amount.get_untracked(), recipient.get_untracked()))
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Submitting..." } else { "Confirm" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
