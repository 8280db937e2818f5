use super::*;

#[test]
fn send_label_tracks_request_and_countdown() {
    assert_eq!(send_label(false, false, 0), "Send Code");
    assert_eq!(send_label(true, false, 0), "Sending...");
    assert_eq!(send_label(false, true, 42), "Resend in 42s");
    assert_eq!(send_label(false, true, 0), "Resend Code");
}

#[test]
fn otp_request_requires_email() {
    assert_eq!(otp_request(OtpPurpose::Login, "   "), Err(("Email Required", "Please enter your email first")));
    assert_eq!(
        otp_request(OtpPurpose::Register, " a@b.com "),
        Ok(OtpRequest { purpose: OtpPurpose::Register, email: "a@b.com".to_owned() })
    );
}

#[test]
fn otp_for_submit_only_requires_code_after_send() {
    assert_eq!(otp_for_submit(false, ""), Ok(None));
    assert_eq!(otp_for_submit(true, " 123456 "), Ok(Some("123456".to_owned())));
    assert_eq!(otp_for_submit(true, "  "), Err(("OTP Required", "Please enter the OTP sent to your email")));
}

#[test]
fn countdown_tick_stops_at_zero() {
    let mut left = 2;
    assert!(tick(&mut left));
    assert_eq!(left, 1);
    assert!(!tick(&mut left));
    assert_eq!(left, 0);
    assert!(!tick(&mut left));
    assert_eq!(left, 0);
}

#[test]
fn countdown_ends_once_the_form_is_disposed() {
    let owner = Owner::new();
    let seconds_left = owner.with(|| RwSignal::new(5_u32));
    assert_eq!(seconds_left.try_update(tick), Some(true));
    drop(owner);
    assert_eq!(seconds_left.try_update(tick), None);
}
