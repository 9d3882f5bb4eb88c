//! Auth page: login / registration / password reset / email verification,
//! plus the Google OAuth entry point and callback handling.

use dioxus::prelude::*;

use api::models::{ConfirmResetRequest, RegisterRequest};
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::use_session;

use crate::views::Navbar;
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
    Reset,
    Verify,
}

/// `?code=…` left by the Google OAuth redirect, if any.
fn oauth_code_from_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get("code")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[component]
pub fn Auth() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut mode = use_signal(|| AuthMode::Login);
    let mut info = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: nothing to do here.
    if session.state().is_authenticated() {
        nav.replace(Route::Profile {});
    }

    // Finish a Google sign-in if the provider redirected back with a code.
    let oauth_session = session.clone();
    let _ = use_resource(move || {
        let session = oauth_session.clone();
        async move {
            if let Some(code) = oauth_code_from_url() {
                if let Err(err) = session.complete_oauth(&code).await {
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    let google_session = session.clone();
    let handle_google = move |_| {
        let session = google_session.clone();
        spawn(async move {
            match session.auth().google_auth_url().await {
                Ok(url) => api::http::force_navigation(&url),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        Navbar {}

        div {
            class: "auth-layout",

            div {
                class: "auth-card",

                div {
                    class: "auth-tabs",
                    button {
                        class: if mode() == AuthMode::Login { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| { mode.set(AuthMode::Login); error.set(None); info.set(None); },
                        "Sign in"
                    }
                    button {
                        class: if mode() == AuthMode::Register { "auth-tab active" } else { "auth-tab" },
                        onclick: move |_| { mode.set(AuthMode::Register); error.set(None); info.set(None); },
                        "Sign up"
                    }
                }

                if let Some(message) = info() {
                    div { class: "info-banner", "{message}" }
                }
                if let Some(message) = error() {
                    ErrorBanner { message }
                }

                if mode() == AuthMode::Login {
                    LoginForm { error, on_reset: move |_| mode.set(AuthMode::Reset) }
                } else if mode() == AuthMode::Register {
                    RegisterForm { error, info, on_verify: move |_| mode.set(AuthMode::Verify) }
                } else if mode() == AuthMode::Reset {
                    ResetForm { error, info }
                } else {
                    VerifyForm { error, info }
                }

                div {
                    class: "auth-divider",
                    span { "or" }
                }

                Button {
                    variant: ButtonVariant::Secondary,
                    class: "auth-google",
                    onclick: handle_google,
                    "Continue with Google"
                }
            }
        }
    }
}

#[component]
fn LoginForm(error: Signal<Option<String>>, on_reset: EventHandler<()>) -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            // Success navigates away; only the failure path needs handling.
            if session.login(&e, &p).await.is_err() {
                loading.set(false);
                error.set(session.state().error);
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_login,
            class: "auth-form",

            Input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
            button {
                class: "auth-link",
                r#type: "button",
                onclick: move |_| on_reset.call(()),
                "Forgot your password?"
            }
        }
    }
}

#[component]
fn RegisterForm(
    error: Signal<Option<String>>,
    info: Signal<Option<String>>,
    on_verify: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            info.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let name = username().trim().to_string();
            let data = RegisterRequest {
                email: e,
                password: p,
                username: (!name.is_empty()).then_some(name),
            };

            loading.set(true);
            match session.register(data).await {
                // Auto-login deployments navigate away before we get here.
                Ok(response) if response.access_token.is_none() => {
                    loading.set(false);
                    info.set(Some(response.message));
                    on_verify.call(());
                }
                Ok(_) => {}
                Err(_) => {
                    loading.set(false);
                    error.set(session.state().error);
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_register,
            class: "auth-form",

            Input {
                placeholder: "Username (optional)",
                value: username(),
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            Input {
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Password (min 8 characters)",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            Input {
                r#type: "password",
                placeholder: "Confirm password",
                value: confirm_password(),
                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Sign up" }
            }
        }
    }
}

/// Two-step password reset: request a token by email, then submit the
/// token with the new password.
#[component]
fn ResetForm(error: Signal<Option<String>>, info: Signal<Option<String>>) -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut token = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut requested = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let request_session = session.clone();
    let handle_request = move |evt: FormEvent| {
        evt.prevent_default();
        let session = request_session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match session.auth().reset_password(email().trim()).await {
                Ok(response) => {
                    info.set(Some(response.message));
                    requested.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    let confirm_session = session.clone();
    let handle_confirm = move |evt: FormEvent| {
        evt.prevent_default();
        let session = confirm_session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let data = ConfirmResetRequest {
                token: token().trim().to_string(),
                new_password: new_password(),
            };
            match session.auth().confirm_reset_password(&data).await {
                Ok(response) => info.set(Some(response.message)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        if !requested() {
            form {
                onsubmit: handle_request,
                class: "auth-form",

                Input {
                    r#type: "email",
                    placeholder: "Account email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    "Send reset email"
                }
            }
        } else {
            form {
                onsubmit: handle_confirm,
                class: "auth-form",

                Input {
                    placeholder: "Reset token",
                    value: token(),
                    oninput: move |evt: FormEvent| token.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "New password",
                    value: new_password(),
                    oninput: move |evt: FormEvent| new_password.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    "Set new password"
                }
            }
        }
    }
}

#[component]
fn VerifyForm(error: Signal<Option<String>>, info: Signal<Option<String>>) -> Element {
    let session = use_session();
    let mut token = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match session.auth().verify_email(token().trim()).await {
                Ok(response) => info.set(Some(response.message)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    rsx! {
        form {
            onsubmit: handle_verify,
            class: "auth-form",

            Input {
                placeholder: "Verification token",
                value: token(),
                oninput: move |evt: FormEvent| token.set(evt.value()),
            }
            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: loading(),
                "Verify email"
            }
        }
    }
}
