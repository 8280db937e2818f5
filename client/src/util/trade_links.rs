//! Deep links into the trading page.
//!
//! DESIGN
//! ======
//! Other pages hand a token to `/trading` through query parameters (`mint`,
//! `type`, `dex`, `slippage`, `jitoTip`) so the prefill survives reloads and
//! server rendering. [`TradePrefill`] is the parsed side of the same link.

#[cfg(test)]
#[path = "trade_links_test.rs"]
mod trade_links_test;

use wire::types::{Dex, TradeSide};

/// Tip attached to quick buys/sells from the trending list, in SOL.
pub const TRENDING_JITO_TIP: f64 = 0.0005;
/// Slippage attached to quick buys/sells from the trending list, in percent.
pub const TRENDING_SLIPPAGE: f64 = 10.0;

/// Values the trading form starts with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradePrefill {
    pub mint: String,
    pub side: TradeSide,
    pub dex: Dex,
    pub slippage: Option<f64>,
    pub jito_tip: Option<f64>,
}

impl TradePrefill {
    /// Simple buy/sell link carrying only mint and side.
    pub fn new(mint: &str, side: TradeSide) -> Self {
        Self { mint: mint.to_owned(), side, ..Self::default() }
    }

    /// Quick-trade link used by the trending list.
    pub fn trending(mint: &str, side: TradeSide) -> Self {
        Self {
            mint: mint.to_owned(),
            side,
            dex: Dex::Jupiter,
            slippage: Some(TRENDING_SLIPPAGE),
            jito_tip: Some(TRENDING_JITO_TIP),
        }
    }

    /// `/trading?..` link for this prefill.
    pub fn href(&self) -> String {
        let mut href = format!("/trading?mint={}&type={}", urlencoding::encode(&self.mint), self.side);
        if self.slippage.is_some() || self.jito_tip.is_some() || self.dex != Dex::default() {
            href.push_str(&format!("&dex={}", self.dex));
        }
        if let Some(slippage) = self.slippage {
            href.push_str(&format!("&slippage={slippage}"));
        }
        if let Some(tip) = self.jito_tip {
            href.push_str(&format!("&jitoTip={tip}"));
        }
        href
    }

    /// Parse query parameters; unknown or malformed values fall back to defaults.
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            mint: get("mint").map(|m| m.trim().to_owned()).unwrap_or_default(),
            side: get("type").and_then(|s| s.parse().ok()).unwrap_or_default(),
            dex: get("dex").and_then(|s| s.parse().ok()).unwrap_or_default(),
            slippage: get("slippage").and_then(|s| crate::util::forms::non_negative(&s)),
            jito_tip: get("jitoTip").and_then(|s| crate::util::forms::non_negative(&s)),
        }
    }
}
