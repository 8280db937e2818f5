//! Result dialog shown after an on-chain action succeeds.

use leptos::prelude::*;
use wire::format;

/// What the dialog lists: a heading, the backend message, the signature
/// (linked to the explorer) and extra label/value rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Receipt {
    pub title: String,
    pub message: String,
    pub signature: String,
    pub details: Vec<(&'static str, String)>,
}

#[component]
pub fn ReceiptDialog(receipt: Receipt, on_close: Callback<()>) -> impl IntoView {
    let Receipt { title, message, signature, details } = receipt;
    let explorer = format::solscan_tx(&signature);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p>{message}</p>
                <dl class="receipt">
                    {details
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect::<Vec<_>>()}
                    <dt>"Signature"</dt>
                    <dd>
                        <a class="link mono" href=explorer target="_blank" rel="noopener noreferrer">
                            {format::short_address(&signature)}
                        </a>
                    </dd>
                </dl>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}
