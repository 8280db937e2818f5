//! Form input parsing shared by the mutation dialogs.
//!
//! Inputs arrive as raw strings from `<input>` elements. Parsing rejects
//! blanks and non-finite numbers before any request is built.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Description used whenever a required field is blank.
pub const MISSING_FIELDS: &str = "Please fill in all fields";

/// Trimmed value, or `None` when blank.
pub fn required(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Strictly positive finite number.
pub fn positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

/// Zero or positive finite number.
pub fn non_negative(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// `balance * percent / 100` as an input string without trailing zeros.
pub fn fraction_of(balance: f64, percent: u8) -> String {
    wire::format::trim_decimal(balance * f64::from(percent) / 100.0, 9)
}
