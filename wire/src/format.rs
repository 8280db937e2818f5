//! Display formatting shared by the web pages and the CLI table output.
//!
//! Everything here is pure string shaping. Amounts are `f64` because the
//! backend already rounds them; no arithmetic beyond scaling happens here.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Base URL of the block explorer used for signature links.
pub const SOLSCAN_TX: &str = "https://solscan.io/tx/";

/// `9xQeWv...VFin` form of a wallet address or signature.
///
/// Values too short to abbreviate are returned unchanged.
#[must_use]
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_owned();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Fixed decimals with `,` thousands separators.
#[must_use]
pub fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `$1,234.56`, with a leading `-` for losses.
#[must_use]
pub fn usd(value: f64) -> String {
    let body = grouped(value, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${body}"),
    }
}

/// `+1.23%` / `-1.23%` / `0.00%`.
#[must_use]
pub fn percent_change(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent:.2}%")
    } else if percent < 0.0 {
        format!("{percent:.2}%")
    } else {
        "0.00%".to_owned()
    }
}

/// At most `max_decimals` digits, trailing zeros removed.
#[must_use]
pub fn trim_decimal(value: f64, max_decimals: usize) -> String {
    let fixed = format!("{value:.max_decimals$}");
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_owned() } else { trimmed.to_owned() }
}

/// Token price: four decimals from 1 upwards, up to ten for sub-unit prices.
#[must_use]
pub fn price(value: f64) -> String {
    if value >= 1.0 { grouped(value, 4) } else { trim_decimal(value, 10) }
}

/// `$1.23M` / `$4.56K` / `$7.89`, used for volumes.
#[must_use]
pub fn compact_usd(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format!("${value:.2}")
    }
}

/// `1.23B` / `4.56M` / `7.89K`, else six decimals.
///
/// Accepts the backend's decimal strings; text that is not a number is
/// returned as-is.
#[must_use]
pub fn compact(raw: &str) -> String {
    let Ok(number) = raw.trim().parse::<f64>() else {
        return raw.to_owned();
    };
    if number >= 1e9 {
        format!("{:.2}B", number / 1e9)
    } else if number >= 1e6 {
        format!("{:.2}M", number / 1e6)
    } else if number >= 1e3 {
        format!("{:.2}K", number / 1e3)
    } else {
        format!("{number:.6}")
    }
}

/// Explorer link for a transaction signature.
#[must_use]
pub fn solscan_tx(signature: &str) -> String {
    format!("{SOLSCAN_TX}{signature}")
}

/// `YYYY-MM-DD` prefix of an ISO-8601 timestamp.
#[must_use]
pub fn date(iso: &str) -> String {
    iso.get(..10).unwrap_or(iso).to_owned()
}

/// `YYYY-MM-DD HH:MM` from an ISO-8601 timestamp, or the date alone when
/// there is no time part.
#[must_use]
pub fn date_time(iso: &str) -> String {
    match (iso.get(..10), iso.get(11..16)) {
        (Some(day), Some(time)) => format!("{day} {time}"),
        _ => date(iso),
    }
}
