//! Paged transaction history.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;
use wire::format;
use wire::types::{Pagination, Transaction, TransactionFlow};

use crate::components::pager::Pager;
use crate::components::protected_page::ProtectedPage;
use crate::components::view_status::ViewStatus;
use crate::state::auth::AuthState;
use crate::state::query::{refresh, use_authed_query};

pub fn flow_class(flow: TransactionFlow) -> &'static str {
    match flow {
        TransactionFlow::Swap => "tx tx--swap",
        TransactionFlow::Outgoing => "tx tx--out",
        TransactionFlow::Incoming => "tx tx--in",
        TransactionFlow::Other => "tx",
    }
}

pub fn flow_label(flow: TransactionFlow) -> &'static str {
    match flow {
        TransactionFlow::Swap => "Swap",
        TransactionFlow::Outgoing => "Sent",
        TransactionFlow::Incoming => "Received",
        TransactionFlow::Other => "Other",
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let counter = RwSignal::new(0_u64);
    let page = RwSignal::new(1_u32);

    let query = use_authed_query(auth, counter, move |token| crate::net::api::transactions(token, page.get_untracked()));
    let status = Signal::derive(move || query.with(|q| q.view_state(|p| p.transactions.is_empty())));
    let pagination =
        Signal::derive(move || query.with(|q| q.ready().map(|p| p.pagination.clone())).unwrap_or_else(Pagination::default));

    let on_page = Callback::new(move |target: u32| {
        page.set(target);
        refresh(counter);
    });

    view! {
        <ProtectedPage title="My Transactions" subtitle="Your transaction history">
            <ViewStatus state=status empty_text="No transactions yet." on_retry=Callback::new(move |()| refresh(counter))/>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Type"</th>
                        <th>"Token"</th>
                        <th>"Amount"</th>
                        <th>"Value"</th>
                        <th>"DEX"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                        <th>"Signature"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || query.with(|q| q.ready().map(|p| p.transactions.clone()).unwrap_or_default())
                        key=|tx| tx.id.clone()
                        children=transaction_row
                    />
                </tbody>
            </table>
            <Show when=move || (pagination.get().total_pages > 1)>
                <Pager pagination=pagination on_page=on_page/>
            </Show>
        </ProtectedPage>
    }
}

fn transaction_row(tx: Transaction) -> impl IntoView {
    let flow = tx.flow();
    view! {
        <tr class=flow_class(flow)>
            <td>{flow_label(flow)}</td>
            <td class="token-cell">
                <img class="token-logo" src=tx.logo alt=""/>
                <span>{tx.symbol}</span>
            </td>
            <td class="tx__amount">{format::trim_decimal(tx.amount, 9)}</td>
            <td>{format::usd(tx.value)}</td>
            <td>{tx.dex}</td>
            <td><span class="badge">{tx.status}</span></td>
            <td>{format::date_time(&tx.created_at)}</td>
            <td>
                <a class="link mono" href=format::solscan_tx(&tx.signature) target="_blank" rel="noopener noreferrer">
                    {format::short_address(&tx.signature)}
                </a>
            </td>
        </tr>
    }
}
