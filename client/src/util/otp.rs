//! One-time passcode request flow shared by login and registration.
//!
//! After a code is sent the form requires it and the "send" button stays
//! disabled for `config::OTP_RESEND_SECS`, ticking down once per second
//! until it reaches zero or the page unmounts.

#[cfg(test)]
#[path = "otp_test.rs"]
mod otp_test;

use leptos::prelude::*;
use wire::types::{OtpPurpose, OtpRequest};

use crate::state::toast::ToastState;

/// OTP UI state for one form.
#[derive(Clone, Copy, Debug)]
pub struct OtpControl {
    pub sent: RwSignal<bool>,
    pub seconds_left: RwSignal<u32>,
    pub sending: RwSignal<bool>,
}

impl Default for OtpControl {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpControl {
    pub fn new() -> Self {
        Self { sent: RwSignal::new(false), seconds_left: RwSignal::new(0), sending: RwSignal::new(false) }
    }

    pub fn can_send(&self) -> bool {
        !self.sending.get() && self.seconds_left.get() == 0
    }

    pub fn button_label(&self) -> String {
        send_label(self.sending.get(), self.sent.get(), self.seconds_left.get())
    }
}

pub fn send_label(sending: bool, sent: bool, seconds_left: u32) -> String {
    if sending {
        "Sending...".to_owned()
    } else if seconds_left > 0 {
        format!("Resend in {seconds_left}s")
    } else if sent {
        "Resend Code".to_owned()
    } else {
        "Send Code".to_owned()
    }
}

/// Build the request, rejecting a blank email.
pub fn otp_request(purpose: OtpPurpose, email: &str) -> Result<OtpRequest, (&'static str, &'static str)> {
    let email = email.trim();
    if email.is_empty() {
        return Err(("Email Required", "Please enter your email first"));
    }
    Ok(OtpRequest { purpose, email: email.to_owned() })
}

/// Whether a submit may proceed given the OTP field.
pub fn otp_for_submit(sent: bool, otp: &str) -> Result<Option<String>, (&'static str, &'static str)> {
    if !sent {
        return Ok(None);
    }
    match crate::util::forms::required(otp) {
        Some(code) => Ok(Some(code)),
        None => Err(("OTP Required", "Please enter the OTP sent to your email")),
    }
}

/// Request a code and start the resend countdown on success.
pub fn send_otp(control: OtpControl, toasts: RwSignal<ToastState>, purpose: OtpPurpose, email: &str) {
    if !control.can_send() {
        return;
    }
    let request = match otp_request(purpose, email) {
        Ok(request) => request,
        Err((title, description)) => {
            crate::state::toast::notify_failure(toasts, title, description);
            return;
        }
    };
    control.sending.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::toast::{notify_api_error, notify_success};

        match crate::net::api::request_otp(&request).await {
            Ok(message) => {
                let description = if message.is_empty() { "Check your email for the code.".to_owned() } else { message };
                notify_success(toasts, "OTP Sent", &description);
                control.sent.set(true);
                start_countdown(control.seconds_left);
            }
            Err(e) => notify_api_error(toasts, "OTP Request Failed", &e),
        }
        control.sending.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, toasts);
        control.sending.set(false);
    }
}

/// Advance the countdown by one second; false once it has reached zero.
pub fn tick(seconds_left: &mut u32) -> bool {
    *seconds_left = seconds_left.saturating_sub(1);
    *seconds_left > 0
}

/// Tick `seconds_left` down once per second. The loop ends at zero, or when
/// the owning form is disposed and the signal can no longer be updated.
#[cfg(feature = "hydrate")]
fn start_countdown(seconds_left: RwSignal<u32>) {
    seconds_left.set(crate::config::OTP_RESEND_SECS);
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if seconds_left.try_update(tick) != Some(true) {
                break;
            }
        }
    });
}
