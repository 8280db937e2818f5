//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"404"</h1>
                <p class="auth-card__subtitle">"Oops! Page not found"</p>
                <a class="btn btn--primary" href="/">"Return to Home"</a>
            </div>
        </div>
    }
}
