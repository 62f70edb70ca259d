//! Auth pages
//!
//! Login, signup, OTP verification, and the password reset flow. These
//! screens talk to the auth and message endpoints directly and drive the
//! session store.

use dioxus::prelude::*;
use esp_api::{ApiClient, endpoints};
use esp_core::{Credentials, OtpChannel, UserProfile};
use serde_json::{Value, json};

use crate::components::{TextInput, ToastOverlay};
use crate::router::Route;
use crate::state::{
    GENERAL, ResetPassMessage, SESSION, SessionAction, dispatch_session, toast_error,
    toast_success,
};

fn looks_like_email(contact: &str) -> bool {
    contact.contains('@')
}

/// Split a combined email-or-mobile field into the payload's two slots.
fn contact_fields(contact: &str) -> (Option<&str>, Option<&str>) {
    if looks_like_email(contact) {
        (Some(contact), None)
    } else {
        (None, Some(contact))
    }
}

fn parse_auth_response(response: &Value) -> Option<(UserProfile, String)> {
    let user = serde_json::from_value(response.get("user")?.clone()).ok()?;
    let token = response.get("token")?.as_str()?.to_string();
    Some((user, token))
}

/// Fire-and-forget OTP send over the channel matching the user's contact.
fn send_otp(channel: OtpChannel) {
    dispatch_session(SessionAction::OtpPending);
    spawn(async move {
        let endpoint = match &channel {
            OtpChannel::Email(_) => endpoints::message::SEND_EMAIL_OTP,
            OtpChannel::Mobile(_) => endpoints::message::SEND_MOBILE_OTP,
        };
        match ApiClient::public().post(endpoint, channel.to_payload(None)).await {
            Ok(_) => dispatch_session(SessionAction::OtpSent),
            Err(err) => {
                dispatch_session(SessionAction::OtpFailed(
                    err.user_message("Failed to send the verification code"),
                ));
            }
        }
    });
}

// ============================================================================
// Login
// ============================================================================

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut contact = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut show_forgot = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let contact = contact.read().clone();
        let password = password.read().clone();
        if contact.is_empty() || password.is_empty() {
            toast_error("Please enter your email or mobile and password");
            return;
        }
        let mut pending = pending;
        pending.set(true);
        dispatch_session(SessionAction::AuthPending);
        spawn(async move {
            let (email, mobile) = contact_fields(&contact);
            let credentials = Credentials {
                email: email.map(str::to_string),
                mobile: mobile.map(str::to_string),
                password,
            };
            let result = ApiClient::public()
                .post(endpoints::auth::LOGIN, credentials.to_payload())
                .await;
            pending.set(false);
            match result {
                Ok(response) => match parse_auth_response(&response) {
                    Some((user, token)) => {
                        dispatch_session(SessionAction::SignedIn { user, token });
                        nav.push(Route::Home {});
                    }
                    None => {
                        dispatch_session(SessionAction::AuthFailed(
                            "Unexpected response from the server".into(),
                        ));
                        toast_error("Login failed. Please try again.");
                    }
                },
                Err(err) => {
                    let message = err.user_message("Login failed. Please try again.");
                    dispatch_session(SessionAction::AuthFailed(message.clone()));
                    toast_error(message);
                }
            }
        });
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-gray-100 px-4",
            ToastOverlay {}
            div { class: "w-full max-w-md rounded-lg bg-white p-8 shadow",
                h2 { class: "text-center text-2xl font-bold text-gray-900", "Sign in to your account" }
                form { class: "mt-8 space-y-6", onsubmit: submit,
                    TextInput {
                        value: contact.read().clone(),
                        label: "Email or mobile number".to_string(),
                        placeholder: "you@example.com".to_string(),
                        on_change: move |value| contact.set(value),
                    }
                    TextInput {
                        value: password.read().clone(),
                        label: "Password".to_string(),
                        input_type: "password".to_string(),
                        on_change: move |value| password.set(value),
                    }
                    button {
                        class: "w-full rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500 disabled:opacity-50",
                        r#type: "submit",
                        disabled: *pending.read(),
                        if *pending.read() { "Signing in..." } else { "Sign in" }
                    }
                }
                div { class: "mt-4 flex items-center justify-between text-sm",
                    button {
                        class: "text-blue-600 hover:text-blue-500",
                        onclick: move |_| show_forgot.set(true),
                        "Forgot password?"
                    }
                    Link { class: "text-blue-600 hover:text-blue-500", to: Route::Memberships {}, "Create an account" }
                }
            }
            if *show_forgot.read() {
                ForgotPasswordDialog { on_close: move |_| show_forgot.set(false) }
            }
        }
    }
}

/// Dialog that sends a reset link to an email address or mobile number.
#[component]
fn ForgotPasswordDialog(on_close: EventHandler<()>) -> Element {
    let nav = use_navigator();
    let mut contact = use_signal(String::new);
    let mut pending = use_signal(|| false);

    let send = move |_| {
        let address = contact.read().clone();
        if address.is_empty() {
            toast_error("Please enter your email or mobile number");
            return;
        }
        let mut pending = pending;
        pending.set(true);
        spawn(async move {
            let is_email = looks_like_email(&address);
            let endpoint = if is_email {
                endpoints::message::FORGOT_PASSWORD_EMAIL_LINK
            } else {
                endpoints::message::FORGOT_PASSWORD_MOBILE_LINK
            };
            let (email, mobile) = contact_fields(&address);
            let payload = json!({ "email": email, "mobile": mobile });
            let result = ApiClient::public().post(endpoint, payload).await;
            pending.set(false);
            match result {
                Ok(response) => {
                    let message = response
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("We have sent a link to reset your password");
                    toast_success(message);
                    dispatch_session(SessionAction::SetResetPassMessage(ResetPassMessage {
                        kind: if is_email { "email".into() } else { "mobile".into() },
                        email_or_mobile: address,
                    }));
                    nav.push(Route::ResetLinkMessage {});
                }
                Err(err) => {
                    toast_error(
                        err.user_message("Something went wrong while sending the reset link"),
                    );
                }
            }
        });
    };

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50",
            div { class: "w-full max-w-md rounded-lg bg-white p-6 shadow-xl",
                h3 { class: "text-lg font-semibold text-gray-900", "Forgot password?" }
                p { class: "mt-1 text-sm text-gray-600", "No worries, we'll send you reset instructions." }
                input {
                    class: "mt-4 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm",
                    placeholder: "Email or mobile number",
                    value: "{contact}",
                    oninput: move |e| contact.set(e.value()),
                }
                div { class: "mt-4 flex justify-end gap-3",
                    button {
                        class: "rounded-md border border-gray-300 px-4 py-2 text-sm text-gray-700",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50",
                        disabled: *pending.read(),
                        onclick: send,
                        if *pending.read() { "Sending..." } else { "Send reset link" }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Register
// ============================================================================

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut contact = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut postal_code = use_signal(String::new);
    let mut terms = use_signal(|| false);
    let mut pending = use_signal(|| false);

    let selected_plan = GENERAL.read().selected_plan.clone();
    let corporate_email = SESSION.read().corporate_email.clone();

    // Signup requires a picked plan.
    use_effect(move || {
        if GENERAL.read().selected_plan.is_none() {
            nav.replace(Route::Memberships {});
        }
    });

    let plan = selected_plan.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(plan) = plan.clone() else {
            toast_error("Please select a membership plan.");
            nav.push(Route::Memberships {});
            return;
        };

        let contact_value = corporate_email
            .clone()
            .unwrap_or_else(|| contact.read().clone());
        if let Some(message) = validate_signup(
            &contact_value,
            &password.read(),
            &postal_code.read(),
            *terms.read(),
        ) {
            toast_error(message);
            return;
        }

        let first = first_name.read().clone();
        let last = last_name.read().clone();
        let pass = password.read().clone();
        let postal = postal_code.read().clone();
        let mut pending = pending;
        pending.set(true);
        dispatch_session(SessionAction::AuthPending);
        spawn(async move {
            let (email, mobile) = contact_fields(&contact_value);
            let payload = json!({
                "firstName": first,
                "lastName": last,
                "email": email,
                "mobile": mobile,
                "password": pass,
                "postalCode": postal,
                "planId": plan.plan_id,
            });
            let result = ApiClient::public().post(endpoints::auth::REGISTER, payload).await;
            pending.set(false);
            match result {
                Ok(response) => match parse_auth_response(&response) {
                    Some((user, token)) => {
                        toast_success("Registration successful!");
                        let channel = if user.email.is_empty() {
                            OtpChannel::Mobile(user.mobile.clone())
                        } else {
                            OtpChannel::Email(user.email.clone())
                        };
                        dispatch_session(SessionAction::SignedIn { user, token });
                        send_otp(channel);
                        nav.push(Route::VerifyUser {});
                    }
                    None => {
                        dispatch_session(SessionAction::AuthFailed(
                            "Unexpected response from the server".into(),
                        ));
                        toast_error("Registration failed. Please try again.");
                    }
                },
                Err(err) => {
                    let message = err.user_message("Registration failed. Please try again.");
                    dispatch_session(SessionAction::AuthFailed(message.clone()));
                    toast_error(message);
                }
            }
        });
    };

    let corporate = SESSION.read().corporate_email.clone();

    rsx! {
        div { class: "relative grid min-h-screen grid-cols-1 bg-gray-50 lg:grid-cols-2",
            ToastOverlay {}
            // Selected plan recap
            div { class: "flex items-center justify-center bg-blue-600 p-8",
                if let Some(plan) = &selected_plan {
                    div { class: "rounded-lg bg-white p-6 shadow-lg",
                        h3 { class: "text-3xl font-semibold", "{plan.plan_name}" }
                        p { class: "my-4 text-3xl font-bold text-blue-600",
                            "{plan.price}"
                            span { class: "text-xl", "/mo" }
                        }
                        p { class: "text-lg font-semibold", "{plan.description}" }
                    }
                }
            }
            div { class: "flex items-center justify-center p-4",
                form { class: "w-full max-w-2xl rounded-2xl bg-white p-6 shadow-lg", onsubmit: submit,
                    h2 { class: "mb-8 text-center text-3xl font-bold text-gray-800",
                        if corporate.is_some() { "Register with corporate email" } else { "Register" }
                    }
                    div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2",
                        TextInput {
                            value: first_name.read().clone(),
                            label: "First name".to_string(),
                            on_change: move |v| first_name.set(v),
                        }
                        TextInput {
                            value: last_name.read().clone(),
                            label: "Last name".to_string(),
                            on_change: move |v| last_name.set(v),
                        }
                    }
                    div { class: "mt-4",
                        TextInput {
                            value: corporate.clone().unwrap_or_else(|| contact.read().clone()),
                            label: if corporate.is_some() { "Corporate email".to_string() } else { "Email or contact number".to_string() },
                            placeholder: "Enter email or contact no.".to_string(),
                            disabled: corporate.is_some(),
                            required: true,
                            on_change: move |v| contact.set(v),
                        }
                    }
                    div { class: "mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2",
                        TextInput {
                            value: password.read().clone(),
                            label: "Password".to_string(),
                            input_type: "password".to_string(),
                            required: true,
                            on_change: move |v| password.set(v),
                        }
                        TextInput {
                            value: postal_code.read().clone(),
                            label: "Postal code".to_string(),
                            required: true,
                            on_change: move |v| postal_code.set(v),
                        }
                    }
                    label { class: "mt-4 flex items-center gap-2 text-sm text-gray-700",
                        input {
                            r#type: "checkbox",
                            checked: *terms.read(),
                            onchange: move |e| terms.set(e.checked()),
                        }
                        "I accept the terms and conditions"
                    }
                    button {
                        class: "mt-6 w-full rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-500 disabled:opacity-50",
                        r#type: "submit",
                        disabled: *pending.read(),
                        if *pending.read() { "Creating account..." } else { "Create account" }
                    }
                }
            }
        }
    }
}

/// First failing signup check, if any.
fn validate_signup(
    contact: &str,
    password: &str,
    postal_code: &str,
    terms: bool,
) -> Option<&'static str> {
    if contact.is_empty() {
        return Some("Email or contact number is required");
    }
    if looks_like_email(contact) {
        if !contact.contains('.') {
            return Some("Invalid email or phone number");
        }
    } else if contact.len() != 10 || !contact.chars().all(|c| c.is_ascii_digit()) {
        return Some("Invalid email or phone number");
    }
    if password.len() < 8 {
        return Some("Password must be at least 8 characters");
    }
    if postal_code.len() != 6 || !postal_code.chars().all(|c| c.is_ascii_digit()) {
        return Some("Postal code must be exactly 6 digits");
    }
    if !terms {
        return Some("You must accept the terms and conditions");
    }
    None
}

// ============================================================================
// OTP verification
// ============================================================================

#[component]
pub fn VerifyUser() -> Element {
    let nav = use_navigator();
    let mut code = use_signal(String::new);
    let mut pending = use_signal(|| false);

    let user = SESSION.read().user.clone();

    use_effect(move || {
        let session = SESSION.read();
        match &session.user {
            None => {
                nav.replace(Route::Login {});
            }
            Some(user) if user.email_verified == 1 || user.mobile_verified == 1 => {
                nav.replace(Route::UserHome {});
            }
            _ => {}
        }
    });

    let verify_user = user.clone();
    let verify = move |_| {
        let entered = code.read().trim().to_string();
        if entered.len() != 6 || !entered.chars().all(|c| c.is_ascii_digit()) {
            toast_error("Please enter a valid 6-digit OTP.");
            return;
        }
        let Some(user) = verify_user.clone() else {
            return;
        };
        let channel = if user.email.is_empty() {
            OtpChannel::Mobile(user.mobile.clone())
        } else {
            OtpChannel::Email(user.email.clone())
        };
        let mut pending = pending;
        pending.set(true);
        spawn(async move {
            let endpoint = match &channel {
                OtpChannel::Email(_) => endpoints::message::VERIFY_EMAIL_OTP,
                OtpChannel::Mobile(_) => endpoints::message::VERIFY_MOBILE_OTP,
            };
            let result = ApiClient::public()
                .post(endpoint, channel.to_payload(Some(&entered)))
                .await;
            pending.set(false);
            match result {
                Ok(_) => {
                    toast_success("OTP verified successfully!");
                    dispatch_session(SessionAction::MarkVerified);
                    nav.push(Route::UserHome {});
                }
                Err(err) => {
                    toast_error(err.user_message("Failed to verify OTP. Please try again."));
                }
            }
        });
    };

    let resend_user = user.clone();
    let resend = move |_| {
        if let Some(user) = resend_user.clone() {
            let channel = if user.email.is_empty() {
                OtpChannel::Mobile(user.mobile)
            } else {
                OtpChannel::Email(user.email)
            };
            send_otp(channel);
            toast_success("OTP has been resent.");
        }
    };

    let hint = user
        .as_ref()
        .map(|u| {
            if u.email.is_empty() {
                format!("Enter the 6-digit code sent to your mobile ({}).", u.mobile)
            } else {
                format!("Enter the 6-digit code sent to your email ({}).", u.email)
            }
        })
        .unwrap_or_default();

    rsx! {
        div { class: "relative flex min-h-screen items-center justify-center bg-gray-100",
            ToastOverlay {}
            div { class: "w-96 rounded-lg bg-white p-8",
                h2 { class: "mb-6 text-center text-2xl font-semibold", "Verify OTP" }
                p { class: "mb-4 text-center text-gray-600", "{hint}" }
                input {
                    class: "block w-full rounded-md border border-gray-300 px-3 py-2 text-center text-lg tracking-[0.5em]",
                    maxlength: "6",
                    inputmode: "numeric",
                    value: "{code}",
                    oninput: move |e| code.set(e.value()),
                }
                button {
                    class: "mt-6 w-full rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50",
                    disabled: *pending.read(),
                    onclick: verify,
                    if *pending.read() { "Verifying..." } else { "Verify" }
                }
                button {
                    class: "mt-3 w-full text-sm text-blue-600 hover:text-blue-500",
                    onclick: resend,
                    "Resend code"
                }
            }
        }
    }
}

// ============================================================================
// Password reset
// ============================================================================

/// Set a new password, arriving from the emailed reset link.
#[component]
pub fn ResetPassword(token: String, email: String) -> Element {
    let nav = use_navigator();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut pending = use_signal(|| false);

    // The link carries the reset token; without one the page is useless.
    {
        let token = token.clone();
        use_effect(move || {
            if token.is_empty() {
                nav.replace(Route::Home {});
            }
        });
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let new_password = password.read().clone();
        if new_password.len() < 6 {
            toast_error("Password must be at least 6 characters");
            return;
        }
        if *confirm.read() != new_password {
            toast_error("Passwords must match");
            return;
        }
        let token = token.clone();
        let email = email.clone();
        let mut pending = pending;
        pending.set(true);
        spawn(async move {
            let payload = json!({
                "EmailOrMobile": email,
                "Token": token,
                "NewPassword": new_password,
            });
            let result = ApiClient::public()
                .post(endpoints::users::FORGOT_PASSWORD, payload)
                .await;
            pending.set(false);
            match result {
                Ok(_) => {
                    nav.push(Route::ResetSuccess {});
                }
                Err(err) => {
                    toast_error(
                        err.user_message("Something went wrong while resetting password"),
                    );
                }
            }
        });
    };

    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center bg-gray-50 px-6",
            ToastOverlay {}
            div { class: "w-full max-w-sm rounded-lg bg-white p-8 shadow",
                h2 { class: "text-center text-2xl font-bold text-gray-900", "Set New Password" }
                p { class: "mt-2 text-center text-sm text-gray-500",
                    "Your password must be different to previously used passwords."
                }
                form { class: "mt-6 space-y-4", onsubmit: submit,
                    TextInput {
                        value: password.read().clone(),
                        label: "New password".to_string(),
                        input_type: "password".to_string(),
                        on_change: move |v| password.set(v),
                    }
                    TextInput {
                        value: confirm.read().clone(),
                        label: "Confirm password".to_string(),
                        input_type: "password".to_string(),
                        on_change: move |v| confirm.set(v),
                    }
                    button {
                        class: "w-full rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50",
                        r#type: "submit",
                        disabled: *pending.read(),
                        if *pending.read() { "Saving..." } else { "Reset password" }
                    }
                }
            }
        }
    }
}

/// Confirmation shown after the reset link went out.
#[component]
pub fn ResetLinkMessage() -> Element {
    let message = SESSION.read().reset_pass_message.clone();

    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center bg-gray-50 px-6 text-center",
            h2 { class: "text-2xl font-bold text-gray-900", "Check your inbox" }
            p { class: "mt-2 text-gray-600",
                if message.email_or_mobile.is_empty() {
                    "We have sent a password reset link to your registered contact."
                } else {
                    "We have sent a password reset link to {message.email_or_mobile}."
                }
            }
            Link { class: "mt-6 text-blue-600 hover:text-blue-500", to: Route::Login {}, "Back to sign in" }
        }
    }
}

#[component]
pub fn ResetSuccess() -> Element {
    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center bg-gray-50 px-6 text-center",
            h2 { class: "text-2xl font-bold text-gray-900", "Password reset" }
            p { class: "mt-2 text-gray-600", "Your password has been changed. You can sign in with it now." }
            Link { class: "mt-6 text-blue-600 hover:text-blue-500", to: Route::Login {}, "Continue to sign in" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contact_field_split() {
        assert_eq!(contact_fields("a@b.com"), (Some("a@b.com"), None));
        assert_eq!(contact_fields("9876543210"), (None, Some("9876543210")));
    }

    #[test]
    fn test_signup_validation_order() {
        assert_eq!(
            validate_signup("", "password1", "600001", true),
            Some("Email or contact number is required")
        );
        assert_eq!(
            validate_signup("12345", "password1", "600001", true),
            Some("Invalid email or phone number")
        );
        assert_eq!(
            validate_signup("a@b.com", "short", "600001", true),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            validate_signup("a@b.com", "password1", "60001", true),
            Some("Postal code must be exactly 6 digits")
        );
        assert_eq!(
            validate_signup("a@b.com", "password1", "600001", false),
            Some("You must accept the terms and conditions")
        );
        assert_eq!(validate_signup("9876543210", "password1", "600001", true), None);
    }

    #[test]
    fn test_auth_response_parsing() {
        let response = json!({
            "user": { "userId": 4, "firstName": "Ada", "userType": "Normal" },
            "token": "jwt"
        });
        let (user, token) = parse_auth_response(&response).unwrap();
        assert_eq!(user.user_id, 4);
        assert_eq!(token, "jwt");

        assert!(parse_auth_response(&json!({ "message": "nope" })).is_none());
    }
}
