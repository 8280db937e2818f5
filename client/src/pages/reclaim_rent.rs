//! Close empty token accounts to recover their rent deposit.
//!
//! Rescanning the wallet is slow on the backend, so a successful close
//! removes the row locally instead of re-fetching the list.

#[cfg(test)]
#[path = "reclaim_rent_test.rs"]
mod reclaim_rent_test;

use leptos::prelude::*;
use wire::format;
use wire::types::{CloseReceipt, EmptyAccount, EmptyAccounts};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::protected_page::ProtectedPage;
use crate::components::receipt_dialog::{Receipt, ReceiptDialog};
use crate::components::view_status::ViewStatus;
use crate::state::auth::AuthState;
use crate::state::query::{Query, refresh, run_mutation, use_authed_query};
use crate::state::toast::ToastState;

/// Rent amounts are small; show them at lamport-ish precision.
pub fn rent_text(sol: f64) -> String {
    format!("{} SOL", format::trim_decimal(sol, 6))
}

pub fn summary_text(accounts: &EmptyAccounts) -> String {
    match accounts.total_accounts {
        0 => "No empty token accounts found.".to_owned(),
        1 => format!("1 empty account holding {}", rent_text(accounts.total_rent_recoverable)),
        n => format!("{n} empty accounts holding {}", rent_text(accounts.total_rent_recoverable)),
    }
}

pub fn close_receipt(message: String, receipt: CloseReceipt, account: &EmptyAccount) -> Receipt {
    Receipt {
        title: "Account Closed".to_owned(),
        message,
        details: vec![
            ("Token", format!("{} ({})", account.name, account.symbol)),
            ("Account", format::short_address(&account.token_account)),
            ("Rent Recovered", rent_text(account.rent)),
        ],
        signature: receipt.signature,
    }
}

#[component]
pub fn ReclaimRentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let counter = RwSignal::new(0_u64);
    // Bumped by closes; nothing tracks it, so the list is not re-fetched.
    let closed = RwSignal::new(0_u64);
    let busy = RwSignal::new(false);
    let closing = RwSignal::new(None::<EmptyAccount>);
    let receipt = RwSignal::new(None::<Receipt>);

    let query = use_authed_query(auth, counter, crate::net::api::empty_accounts);
    let status = Signal::derive(move || query.with(|q| q.view_state(|a| a.empty_accounts.is_empty())));

    let on_close = Callback::new(move |()| {
        let Some(account) = closing.get_untracked() else {
            return;
        };
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };
        let request = crate::net::api::close_account(token, account.mint.clone());
        run_mutation(busy, toasts, closed, "Close Failed", request, move |reply| {
            query.update(|q| {
                q.edit(|accounts| {
                    accounts.remove_closed(&account.mint);
                });
            });
            closing.set(None);
            receipt.set(Some(close_receipt(reply.message, reply.data, &account)));
        });
    });

    view! {
        <ProtectedPage title="Reclaim Rent" subtitle="Close empty token accounts and get the SOL back">
            <section class="card stat">
                <h3>"Recoverable Rent"</h3>
                <p class="stat__value">
                    {move || query.with(|q| q.ready().map(|a| rent_text(a.total_rent_recoverable))).unwrap_or_else(|| "-".to_owned())}
                </p>
                <p class="stat__hint">{move || query.with(|q| q.ready().map(summary_text)).unwrap_or_default()}</p>
                <button class="btn" on:click=move |_| refresh(counter) disabled=move || query.with(Query::is_loading)>
                    "Rescan"
                </button>
            </section>
            <ViewStatus state=status empty_text="No empty token accounts found." on_retry=Callback::new(move |()| refresh(counter))/>
            <ul class="row-list">
                <For
                    each=move || query.with(|q| q.ready().map(|a| a.empty_accounts.clone()).unwrap_or_default())
                    key=|account| account.token_account.clone()
                    children=move |account| {
                        let target = account.clone();
                        view! {
                            <li class="row">
                                <img class="token-logo" src=account.logo alt=""/>
                                <span class="row__main">
                                    {account.name} " " <small>{account.symbol}</small>
                                </span>
                                <span class="mono">{format::short_address(&account.token_account)}</span>
                                <span>{rent_text(account.rent)}</span>
                                <button class="btn btn--danger btn--small" on:click=move |_| closing.set(Some(target.clone()))>
                                    "Close"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            {move || closing.get().map(|account| view! {
                <ConfirmDialog
                    title="Close Account"
                    message=Signal::derive(move || format!(
                        "Close the empty {} account and reclaim {}?",
                        account.symbol,
                        rent_text(account.rent),
                    ))
                    confirm_label="Close"
                    busy=busy
                    on_cancel=Callback::new(move |()| closing.set(None))
                    on_confirm=on_close
                />
            })}
            {move || receipt.get().map(|done| view! {
                <ReceiptDialog receipt=done on_close=Callback::new(move |()| receipt.set(None))/>
            })}
        </ProtectedPage>
    }
}
