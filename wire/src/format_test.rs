use super::*;

// =============================================================
// Addresses and links
// =============================================================

#[test]
fn short_address_keeps_head_and_tail() {
    assert_eq!(short_address("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin"), "9xQeWv...VFin");
}

#[test]
fn short_address_leaves_short_values_alone() {
    assert_eq!(short_address("abc"), "abc");
    assert_eq!(short_address(""), "");
}

#[test]
fn solscan_link_appends_signature() {
    assert_eq!(solscan_tx("5abc"), "https://solscan.io/tx/5abc");
}

// =============================================================
// Numbers
// =============================================================

#[test]
fn grouped_inserts_thousands_separators() {
    assert_eq!(grouped(1_234_567.891, 2), "1,234,567.89");
    assert_eq!(grouped(999.0, 0), "999");
    assert_eq!(grouped(-1000.0, 1), "-1,000.0");
}

#[test]
fn grouped_drops_sign_of_rounded_zero() {
    assert_eq!(grouped(-0.001, 2), "0.00");
}

#[test]
fn usd_places_sign_before_dollar() {
    assert_eq!(usd(1234.5), "$1,234.50");
    assert_eq!(usd(-12.0), "-$12.00");
    assert_eq!(usd(0.0), "$0.00");
}

#[test]
fn percent_change_marks_gains() {
    assert_eq!(percent_change(1.234), "+1.23%");
    assert_eq!(percent_change(-4.5), "-4.50%");
    assert_eq!(percent_change(0.0), "0.00%");
}

#[test]
fn trim_decimal_removes_trailing_zeros_only_after_point() {
    assert_eq!(trim_decimal(1.5, 10), "1.5");
    assert_eq!(trim_decimal(100.0, 0), "100");
    assert_eq!(trim_decimal(100.0, 4), "100");
    assert_eq!(trim_decimal(0.000_012_3, 10), "0.0000123");
}

#[test]
fn price_switches_precision_at_one() {
    assert_eq!(price(1234.5), "1,234.5000");
    assert_eq!(price(0.000_045), "0.000045");
    assert_eq!(price(0.0), "0");
}

#[test]
fn compact_usd_scales_volumes() {
    assert_eq!(compact_usd(2_500_000.0), "$2.50M");
    assert_eq!(compact_usd(1_500.0), "$1.50K");
    assert_eq!(compact_usd(12.5), "$12.50");
}

#[test]
fn compact_handles_backend_strings() {
    assert_eq!(compact("1000000000"), "1.00B");
    assert_eq!(compact("2500000"), "2.50M");
    assert_eq!(compact("1234"), "1.23K");
    assert_eq!(compact("0.5"), "0.500000");
    assert_eq!(compact("n/a"), "n/a");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn date_takes_day_prefix() {
    assert_eq!(date("2025-01-02T03:04:05.000Z"), "2025-01-02");
    assert_eq!(date("soon"), "soon");
}

#[test]
fn date_time_includes_minutes_when_present() {
    assert_eq!(date_time("2025-01-02T03:04:05.000Z"), "2025-01-02 03:04");
    assert_eq!(date_time("2025-01-02"), "2025-01-02");
}
