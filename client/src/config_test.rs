use super::*;

#[test]
fn normalize_base_trims_whitespace_and_trailing_slashes() {
    assert_eq!(normalize_base(" https://api.keylo.io// "), "https://api.keylo.io");
}

#[test]
fn normalize_base_keeps_empty_for_same_origin() {
    assert_eq!(normalize_base(""), "");
    assert_eq!(normalize_base("/"), "");
}

#[test]
fn poll_and_cooldown_constants() {
    assert_eq!(SOL_PRICE_POLL.as_secs(), 30);
    assert_eq!(OTP_RESEND_SECS, 60);
    assert_eq!(TOAST_TTL.as_secs(), 5);
}
