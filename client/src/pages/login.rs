//! Email + password sign-in, with an optional emailed one-time code.
//!
//! Signed-in visitors are sent straight to `/dashboard`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::types::{LoginRequest, OtpPurpose};

use crate::state::auth::AuthState;
use crate::state::toast::{ToastState, notify_failure};
use crate::util::auth::install_authed_redirect;
use crate::util::forms::{MISSING_FIELDS, required};
use crate::util::otp::{OtpControl, otp_for_submit, send_otp};

/// Build the login request, or the `(title, description)` of the toast to show.
pub fn validate_login(
    email: &str,
    password: &str,
    otp_sent: bool,
    otp: &str,
) -> Result<LoginRequest, (&'static str, &'static str)> {
    let (Some(email), Some(password)) = (required(email), required(password)) else {
        return Err(("Missing Fields", MISSING_FIELDS));
    };
    let otp = otp_for_submit(otp_sent, otp)?;
    Ok(LoginRequest { email, password, otp })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_authed_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let control = OtpControl::new();

    let on_send_otp = move |_| send_otp(control, toasts, OtpPurpose::Login, &email.get_untracked());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login(&email.get(), &password.get(), control.sent.get(), &otp.get()) {
            Ok(request) => request,
            Err((title, description)) => {
                notify_failure(toasts, title, description);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::toast::{notify_api_error, notify_success};

            match crate::net::api::login(&request).await {
                Ok(reply) => {
                    crate::util::auth::complete_sign_in(auth, reply.data);
                    notify_success(toasts, "Login Successful", "Welcome back!");
                }
                Err(e) => notify_api_error(toasts, "Login Failed", &e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your Keylo account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="email">"Email"</label>
                    <div class="auth-form__row">
                        <input
                            id="email"
                            class="input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn--outline"
                            type="button"
                            on:click=on_send_otp
                            disabled=move || !control.can_send() || email.get().trim().is_empty()
                        >
                            {move || control.button_label()}
                        </button>
                    </div>
                    <Show when=move || control.sent.get()>
                        <label class="auth-form__label" for="otp">"Login OTP"</label>
                        <input
                            id="otp"
                            class="input"
                            type="text"
                            maxlength="6"
                            placeholder="Enter the OTP sent to your email"
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(event_target_value(&ev))
                        />
                    </Show>
                    <label class="auth-form__label" for="password">"Password"</label>
                    <div class="auth-form__row">
                        <input
                            id="password"
                            class="input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn btn--ghost" type="button" on:click=move |_| show_password.update(|v| *v = !*v)>
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
