//! Public marketing page at `/`.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 6] = [
    (
        "Bank-Level Security & Token Analysis",
        "Encrypted key custody, plus a Token Overview that shows holder distribution, authorities and liquidity before you trade.",
    ),
    (
        "Complete Wallet & Trading System",
        "Portfolio tracking, transaction history, asset management and trading tools in one place.",
    ),
    (
        "Smart Limit Orders & Multi-DEX Trading",
        "Limit orders that execute automatically across Raydium, Jupiter, Meteora, PumpFun and more.",
    ),
    (
        "Real-Time Token Intelligence",
        "Holder distribution, market cap, liquidity and trending status for any Solana token.",
    ),
    (
        "Lightning Fast & Always Online",
        "Instant trades and live price updates on Solana's high-performance chain.",
    ),
    (
        "Open Source & Self-Hostable",
        "Run your own instance locally or in the cloud and keep full control of your wallet backend.",
    ),
];

const DEXES: [(&str, &str); 6] = [
    ("Raydium", "Trade on Solana's most popular AMM with deep liquidity"),
    ("Jupiter", "Get the best prices across all Solana DEXs automatically"),
    ("Meteora", "Access dynamic liquidity pools and advanced trading features"),
    ("Pump.fun", "Discover and trade the hottest new meme coins early"),
    ("LaunchLab", "Participate in token launches and IDO events"),
    ("Moonshot", "Community-driven trading with social features"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="landing__nav">
                <a class="landing__brand" href="/">"Keylo"</a>
                <div class="landing__nav-links">
                    <a href="#features">"Features"</a>
                    <a href="#dexes">"DEXs"</a>
                    <a class="btn btn--primary" href="/login">"Login"</a>
                </div>
            </nav>

            <section class="hero">
                <h1 class="hero__title">"Secure Solana Wallet" <br/> "& Trading Platform"</h1>
                <p class="hero__subtitle">
                    "Solana wallet backend with institutional-level security and consumer-friendly features, "
                    "built for users who need reliable portfolio management."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/login">"Login"</a>
                    <a class="btn btn--outline" href="/register">"Register"</a>
                </div>
            </section>

            <section id="features" class="landing__section">
                <h2>"Everything you need to trade on Solana"</h2>
                <div class="card-grid">
                    {FEATURES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="card">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id="dexes" class="landing__section">
                <h2>"Trade across every major DEX"</h2>
                <div class="card-grid">
                    {DEXES
                        .into_iter()
                        .map(|(name, description)| {
                            view! {
                                <div class="card card--dex">
                                    <h3>{name}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="landing__cta">
                <h2>"Ready to take control?"</h2>
                <p>"Open source and production-ready. Host it on localhost or deploy it to the cloud."</p>
                <div class="hero__actions">
                    <a
                        class="btn btn--primary"
                        href="https://github.com/ahk780/keylo-solana-wallet"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View on GitHub"
                    </a>
                    <a class="btn btn--outline" href="/login">"Start Building"</a>
                </div>
            </section>

            <footer class="landing__footer">
                <p>"© 2025 Keylo. All rights reserved."</p>
                <p>"Built on Solana"</p>
            </footer>
        </div>
    }
}
