//! Token metadata, authorities and holder concentration for any mint.

#[cfg(test)]
#[path = "token_overview_test.rs"]
mod token_overview_test;

use leptos::prelude::*;
use wire::format;
use wire::types::{Creator, TokenOverview, TradeSide};

use crate::components::protected_page::ProtectedPage;
use crate::state::auth::AuthState;
use crate::state::query::Query;
use crate::state::toast::{ToastState, notify_failure};
use crate::util::forms::required;
use crate::util::trade_links::TradePrefill;

/// Trimmed mint, or the toast to show when blank.
pub fn validate_mint(raw: &str) -> Result<String, (&'static str, &'static str)> {
    required(raw).ok_or(("Error", "Please enter a mint address"))
}

/// Authority state: an absent authority means it was revoked.
pub fn authority_label(authority: Option<&str>) -> String {
    match authority.map(str::trim) {
        Some(address) if !address.is_empty() => address.to_owned(),
        _ => "Revoked".to_owned(),
    }
}

pub fn token_standard(is_token2022: bool) -> &'static str {
    if is_token2022 { "Token-2022" } else { "SPL Token" }
}

/// Backend percentages arrive as decimal strings.
pub fn percent_text(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) => format!("{value:.2}%"),
        Err(_) if raw.trim().is_empty() => "-".to_owned(),
        Err(_) => raw.to_owned(),
    }
}

#[component]
pub fn TokenOverviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let mint = RwSignal::new(String::new());
    let overview = RwSignal::new(None::<Query<TokenOverview>>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if overview.with(|o| o.as_ref().is_some_and(Query::is_loading)) {
            return;
        }
        let wanted = match validate_mint(&mint.get()) {
            Ok(wanted) => wanted,
            Err((title, description)) => {
                notify_failure(toasts, title, description);
                return;
            }
        };
        let Some(token) = auth.with_untracked(|a| a.token().map(str::to_owned)) else {
            return;
        };
        overview.set(Some(Query::Loading));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::token_overview(token, wanted).await;
            if let Err(e) = &result {
                crate::state::toast::notify_api_error(toasts, "Lookup Failed", e);
            }
            overview.set(Some(Query::from_result(result)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, wanted);
            overview.set(None);
        }
    };

    view! {
        <ProtectedPage title="Token Overview" subtitle="Inspect any Solana token before trading">
            <form class="card search-form" on:submit=on_submit>
                <input
                    class="input mono"
                    type="text"
                    placeholder="Enter token mint address"
                    prop:value=move || mint.get()
                    on:input=move |ev| mint.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    {move || if overview.with(|o| o.as_ref().is_some_and(Query::is_loading)) { "Loading..." } else { "Analyze" }}
                </button>
            </form>
            {move || match overview.get() {
                None => view! { <p class="view-status view-status--empty">"Enter a mint address to see its overview."</p> }.into_any(),
                Some(Query::Idle | Query::Loading) => view! { <p class="view-status view-status--loading">"Loading..."</p> }.into_any(),
                Some(Query::Failed(message)) => view! { <p class="view-status view-status--error">{message}</p> }.into_any(),
                Some(Query::Ready(data)) => overview_body(data, toasts).into_any(),
            }}
        </ProtectedPage>
    }
}

fn overview_body(data: TokenOverview, toasts: RwSignal<ToastState>) -> impl IntoView {
    let buy = TradePrefill::new(&data.ca, TradeSide::Buy).href();
    let sell = TradePrefill::new(&data.ca, TradeSide::Sell).href();
    let address = data.ca.clone();
    let socials = [("Website", data.socials.website), ("Twitter", data.socials.twitter), ("Telegram", data.socials.telegram)];

    view! {
        <section class="card token-header">
            <img class="token-logo token-logo--large" src=data.image alt=""/>
            <div>
                <h2>{data.name} " " <small>{data.symbol}</small></h2>
                <div class="wallet-card__address">
                    <code class="mono">{data.ca.clone()}</code>
                    <button class="btn btn--ghost" on:click=move |_| crate::util::clipboard::copy_text(address.clone(), "Mint address", toasts)>
                        "Copy"
                    </button>
                </div>
                {data.description.map(|text| view! { <p class="token-header__description">{text}</p> })}
                <div class="token-header__links">
                    {socials
                        .into_iter()
                        .filter_map(|(label, link)| link.filter(|l| !l.trim().is_empty()).map(|link| view! {
                            <a class="link" href=link target="_blank" rel="noopener noreferrer">{label}</a>
                        }))
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="token-header__actions">
                <a class="btn btn--buy" href=buy>"Buy"</a>
                <a class="btn btn--sell" href=sell>"Sell"</a>
            </div>
        </section>

        <section class="stat-grid">
            <div class="card">
                <h3>"Price"</h3>
                <dl>
                    <dt>"Price (USD)"</dt>
                    <dd>{format!("${}", format::compact(&data.price_in_usd))}</dd>
                    <dt>"Price (SOL)"</dt>
                    <dd>{format::compact(&data.price_in_sol)}</dd>
                    <dt>"Market Cap"</dt>
                    <dd>{format!("${}", format::compact(&data.market_cap))}</dd>
                </dl>
            </div>
            <div class="card">
                <h3>"Supply & Holders"</h3>
                <dl>
                    <dt>"Total Supply"</dt>
                    <dd>{format::compact(&data.supply)}</dd>
                    <dt>"Decimals"</dt>
                    <dd>{data.decimals}</dd>
                    <dt>"Top 10 Holders"</dt>
                    <dd>{percent_text(&data.top10_holders_percent)}</dd>
                    <dt>"Top 20 Holders"</dt>
                    <dd>{percent_text(&data.top20_holders_percent)}</dd>
                </dl>
            </div>
            <div class="card">
                <h3>"Market"</h3>
                <dl>
                    <dt>"DEX"</dt>
                    <dd>{data.dex}</dd>
                    <dt>"Liquidity"</dt>
                    <dd>{data.liquidity.map(|l| format!("${}", format::compact(&l))).unwrap_or_else(|| "-".to_owned())}</dd>
                    <dt>"Bonding Curve Progress"</dt>
                    <dd>{data.bonding_curve_progress.map(|p| percent_text(&p)).unwrap_or_else(|| "-".to_owned())}</dd>
                    <dt>"Token Standard"</dt>
                    <dd>{token_standard(data.is_token2022)}</dd>
                </dl>
            </div>
        </section>

        <section class="card">
            <h3>"Token Authorities"</h3>
            <dl>
                <dt>"Mint Authority"</dt>
                <dd class="mono">{authority_label(data.mint_authority.as_deref())}</dd>
                <dt>"Freeze Authority"</dt>
                <dd class="mono">{authority_label(data.freeze_authority.as_deref())}</dd>
                <dt>"Update Authority"</dt>
                <dd class="mono">{authority_label(Some(&data.update_authority))}</dd>
                <dt>"Pool"</dt>
                <dd class="mono">{data.pool_id.unwrap_or_else(|| "-".to_owned())}</dd>
            </dl>
        </section>

        <section class="card">
            <h3>"Creators"</h3>
            {if data.creators.is_empty() {
                view! { <p class="view-status view-status--empty">"No creators listed."</p> }.into_any()
            } else {
                view! { <ul class="row-list">{data.creators.into_iter().map(creator_row).collect::<Vec<_>>()}</ul> }.into_any()
            }}
        </section>
    }
}

fn creator_row(creator: Creator) -> impl IntoView {
    view! {
        <li class="row">
            <span class="mono row__main">{format::short_address(&creator.address)}</span>
            {creator.verified.then(|| view! { <span class="badge">"Verified"</span> })}
            <span>{format!("{}%", creator.share)}</span>
        </li>
    }
}
