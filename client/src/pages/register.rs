//! Account creation with email OTP verification.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::types::{OtpPurpose, RegisterRequest};

use crate::state::auth::AuthState;
use crate::state::toast::{ToastState, notify_failure};
use crate::util::auth::install_authed_redirect;
use crate::util::forms::{MISSING_FIELDS, required};
use crate::util::otp::{OtpControl, otp_for_submit, send_otp};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub otp: String,
}

/// Check the form in the order the user is told about problems: blanks,
/// mismatch, length, then the OTP once one has been sent.
pub fn validate_registration(
    form: &RegisterForm,
    otp_sent: bool,
) -> Result<RegisterRequest, (&'static str, &'static str)> {
    let (Some(name), Some(email)) = (required(&form.name), required(&form.email)) else {
        return Err(("Missing Fields", MISSING_FIELDS));
    };
    if form.password.is_empty() {
        return Err(("Missing Fields", MISSING_FIELDS));
    }
    if form.password != form.confirm_password {
        return Err(("Password Mismatch", "Passwords do not match"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(("Weak Password", "Password must be at least 8 characters long"));
    }
    let otp = otp_for_submit(otp_sent, &form.otp)?;
    Ok(RegisterRequest { name, email, password: form.password.clone(), otp })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_authed_redirect(auth, use_navigate());

    let form = RwSignal::new(RegisterForm::default());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let control = OtpControl::new();

    let on_send_otp =
        move |_| send_otp(control, toasts, OtpPurpose::Register, &form.with_untracked(|f| f.email.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(|f| validate_registration(f, control.sent.get())) {
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

            match crate::net::api::register(&request).await {
                Ok(reply) => {
                    crate::util::auth::complete_sign_in(auth, reply.data);
                    notify_success(toasts, "Registration Successful", "Welcome to Keylo!");
                }
                Err(e) => notify_api_error(toasts, "Registration Failed", &e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    let input_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create Account"</h1>
                <p class="auth-card__subtitle">"Join Keylo and start trading"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="name">"Full Name"</label>
                    <input
                        id="name"
                        class="input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="email">"Email"</label>
                    <div class="auth-form__row">
                        <input
                            id="email"
                            class="input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <button
                            class="btn btn--outline"
                            type="button"
                            on:click=on_send_otp
                            disabled=move || !control.can_send() || form.with(|f| f.email.trim().is_empty())
                        >
                            {move || control.button_label()}
                        </button>
                    </div>
                    <Show when=move || control.sent.get()>
                        <label class="auth-form__label" for="otp">"Registration OTP"</label>
                        <input
                            id="otp"
                            class="input"
                            type="text"
                            maxlength="6"
                            placeholder="Enter the OTP sent to your email"
                            prop:value=move || form.with(|f| f.otp.clone())
                            on:input=move |ev| form.update(|f| f.otp = event_target_value(&ev))
                        />
                    </Show>
                    <label class="auth-form__label" for="password">"Password"</label>
                    <div class="auth-form__row">
                        <input
                            id="password"
                            class="input"
                            type=input_type
                            placeholder="Create a password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button class="btn btn--ghost" type="button" on:click=move |_| show_password.update(|v| *v = !*v)>
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <label class="auth-form__label" for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        class="input"
                        type=input_type
                        placeholder="Confirm your password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
