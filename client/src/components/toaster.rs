//! Toast stack rendered once at the app root.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let Toast { id, kind, title, description } = toast;
                    let description = (!description.is_empty())
                        .then(|| view! { <p class="toast__description">{description}</p> });
                    view! {
                        <div class=kind.css_class()>
                            <div class="toast__body">
                                <strong class="toast__title">{title}</strong>
                                {description}
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
