//! Modal confirmation for destructive actions (delete order, close account).

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: String,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || busy.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| on_confirm.run(())
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Working...".to_owned() } else { confirm_label.clone() }}
                    </button>
                </div>
            </div>
        </div>
    }
}
