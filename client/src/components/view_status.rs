//! Placeholder rendered for every non-populated [`ViewState`].

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::query::ViewState;

#[component]
pub fn ViewStatus(
    #[prop(into)] state: Signal<ViewState>,
    #[prop(into)] empty_text: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    move || match state.get() {
        ViewState::Loading => view! { <p class="view-status view-status--loading">"Loading..."</p> }.into_any(),
        ViewState::Error(message) => view! {
            <div class="view-status view-status--error">
                <p>{message}</p>
                {on_retry.map(|retry| view! {
                    <button class="btn" on:click=move |_| retry.run(())>"Try again"</button>
                })}
            </div>
        }
        .into_any(),
        ViewState::Empty => view! { <p class="view-status view-status--empty">{empty_text.clone()}</p> }.into_any(),
        ViewState::Populated => ().into_any(),
    }
}
