//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{
    assets::AssetsPage, dashboard::DashboardPage, landing::LandingPage, limit_orders::LimitOrdersPage,
    login::LoginPage, not_found::NotFoundPage, reclaim_rent::ReclaimRentPage, register::RegisterPage,
    token_overview::TokenOverviewPage, trading::TradingPage, transactions::TransactionsPage, trending::TrendingPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts, restores the stored session once
/// the app is live in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // Effects only run after hydration, so SSR and the first client frame
    // agree on the "validating" state.
    Effect::new(move || crate::util::auth::restore_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/keylo.css"/>
        <Title text="Keylo"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("assets") view=AssetsPage/>
                <Route path=StaticSegment("transactions") view=TransactionsPage/>
                <Route path=StaticSegment("trading") view=TradingPage/>
                <Route path=StaticSegment("limit-orders") view=LimitOrdersPage/>
                <Route path=StaticSegment("token-overview") view=TokenOverviewPage/>
                <Route path=StaticSegment("trending") view=TrendingPage/>
                <Route path=StaticSegment("reclaim-rent") view=ReclaimRentPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
