//! Layout and guard shared by every authenticated route.
//!
//! SYSTEM CONTEXT
//! ==============
//! While the session is validating the page shows "Loading..."; once auth
//! settles without a session it redirects to `/login`. Only a confirmed
//! session renders the sidebar and the page body.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProtectedPage(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().session.is_authenticated()
            fallback=move || {
                view! {
                    <div class="page page--pending">
                        <p>{move || if auth.get().loading() { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-layout">
                <Sidebar/>
                <main class="page">
                    <header class="page__header">
                        <h1>{title.clone()}</h1>
                        <p class="page__subtitle">{subtitle.clone()}</p>
                    </header>
                    {children()}
                </main>
            </div>
        </Show>
    }
}
