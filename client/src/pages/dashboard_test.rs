use super::*;

#[test]
fn trend_class_marks_losses_down() {
    assert_eq!(trend_class(-0.01), "text-down");
    assert_eq!(trend_class(0.0), "text-up");
    assert_eq!(trend_class(3.5), "text-up");
}

#[test]
fn signed_amount_always_shows_sign() {
    assert_eq!(signed_amount(1.5), "+1.5");
    assert_eq!(signed_amount(-2.0), "-2");
    assert_eq!(signed_amount(0.0), "+0");
}
