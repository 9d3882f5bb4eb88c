//! Profile page: the signed-in user's identity plus the device panel.

use dioxus::prelude::*;

use api::models::{CreateDeviceRequest, CreateTokenRequest, Device, DevicePlatform, DeviceToken};
use ui::components::{Button, ButtonVariant, ErrorBanner, Input};
use ui::use_session;

use crate::views::Navbar;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Revalidate the persisted credential; anonymous visitors go to /auth.
    let guard = session.clone();
    let _ = use_resource(move || {
        let session = guard.clone();
        async move {
            if !session.check_session().await {
                nav.replace(Route::Auth {});
            }
        }
    });

    let state = session.state();

    rsx! {
        Navbar {}

        div {
            class: "page",

            if let Some(user) = state.user {
                div {
                    class: "profile-card",

                    h2 { class: "profile-name", "{user.display_name()}" }
                    p { class: "profile-email", "{user.email}" }
                    if user.is_verified {
                        span { class: "badge badge-ok", "Verified" }
                    } else {
                        span { class: "badge", "Email not verified" }
                    }
                }
            }

            DevicePanel {}
        }
    }
}

fn platform_from_tag(tag: &str) -> DevicePlatform {
    match tag {
        "windows" => DevicePlatform::Windows,
        "macos" => DevicePlatform::Macos,
        "linux" => DevicePlatform::Linux,
        "android" => DevicePlatform::Android,
        "ios" => DevicePlatform::Ios,
        _ => DevicePlatform::Other,
    }
}

/// Device list with creation, per-device token management, and deletion.
/// Nothing here is cached: every mutation triggers a fresh listing.
#[component]
fn DevicePanel() -> Element {
    let session = use_session();
    let mut devices = use_signal(Vec::<Device>::new);
    let mut error = use_signal(|| Option::<String>::None);

    let mut new_name = use_signal(String::new);
    let mut new_platform = use_signal(|| "other".to_string());

    let mut expanded = use_signal(|| Option::<i64>::None);
    let mut tokens = use_signal(Vec::<DeviceToken>::new);
    let mut token_name = use_signal(String::new);
    let mut fresh_secret = use_signal(|| Option::<String>::None);

    let loader_session = session.clone();
    let mut loader = use_resource(move || {
        let session = loader_session.clone();
        async move {
            match session.devices().get_all().await {
                Ok(list) => devices.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    });

    let create_session = session.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let session = create_session.clone();
        spawn(async move {
            let name = new_name().trim().to_string();
            if name.is_empty() {
                error.set(Some("Device name is required".to_string()));
                return;
            }
            error.set(None);
            let data = CreateDeviceRequest {
                device_name: name,
                platform: platform_from_tag(&new_platform()),
                platform_version: None,
            };
            match session.devices().create(&data).await {
                Ok(_) => {
                    new_name.set(String::new());
                    loader.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let toggle_session = session.clone();
    let handle_toggle = move |device_id: i64| {
        let session = toggle_session.clone();
        spawn(async move {
            fresh_secret.set(None);
            if expanded() == Some(device_id) {
                expanded.set(None);
                return;
            }
            match session.devices().get_tokens(device_id).await {
                Ok(list) => {
                    tokens.set(list);
                    expanded.set(Some(device_id));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let token_session = session.clone();
    let handle_create_token = move |evt: FormEvent| {
        evt.prevent_default();
        let session = token_session.clone();
        spawn(async move {
            let Some(device_id) = expanded() else { return };
            let name = token_name().trim().to_string();
            if name.is_empty() {
                error.set(Some("Token name is required".to_string()));
                return;
            }
            error.set(None);
            let data = CreateTokenRequest {
                token_name: name,
                expires_in_days: 30,
            };
            match session.devices().create_token(device_id, &data).await {
                Ok(created) => {
                    // The secret is shown exactly once.
                    fresh_secret.set(created.token.clone());
                    token_name.set(String::new());
                    if let Ok(list) = session.devices().get_tokens(device_id).await {
                        tokens.set(list);
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let revoke_session = session.clone();
    let handle_revoke = move |token_id: i64| {
        let session = revoke_session.clone();
        spawn(async move {
            let Some(device_id) = expanded() else { return };
            match session.devices().revoke_token(device_id, token_id).await {
                Ok(_) => {
                    if let Ok(list) = session.devices().get_tokens(device_id).await {
                        tokens.set(list);
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let delete_session = session.clone();
    let handle_delete = move |device_id: i64| {
        let session = delete_session.clone();
        spawn(async move {
            match session.devices().delete(device_id).await {
                Ok(_) => {
                    if expanded() == Some(device_id) {
                        expanded.set(None);
                    }
                    loader.restart();
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "device-panel",

            h3 { "Devices" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }

            form {
                onsubmit: handle_create,
                class: "device-create",

                Input {
                    placeholder: "Device name",
                    value: new_name(),
                    oninput: move |evt: FormEvent| new_name.set(evt.value()),
                }
                select {
                    class: "input",
                    value: "{new_platform}",
                    onchange: move |evt: FormEvent| new_platform.set(evt.value()),
                    option { value: "windows", "Windows" }
                    option { value: "macos", "macOS" }
                    option { value: "linux", "Linux" }
                    option { value: "android", "Android" }
                    option { value: "ios", "iOS" }
                    option { value: "other", "Other" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Add device"
                }
            }

            if devices().is_empty() {
                p { class: "device-empty", "No devices registered yet." }
            }

            for device in devices() {
                div {
                    key: "{device.id}",
                    class: "device-row",

                    div {
                        class: "device-summary",
                        span { class: "device-name", "{device.device_name}" }
                        span { class: "device-platform", "{device.platform:?}" }
                        if !device.is_active {
                            span { class: "badge", "Inactive" }
                        }
                        button {
                            class: "auth-link",
                            onclick: {
                                let handle_toggle = handle_toggle.clone();
                                let id = device.id;
                                move |_| handle_toggle(id)
                            },
                            if expanded() == Some(device.id) { "Hide tokens" } else { "Tokens" }
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: {
                                let handle_delete = handle_delete.clone();
                                let id = device.id;
                                move |_| handle_delete(id)
                            },
                            "Delete"
                        }
                    }

                    if expanded() == Some(device.id) {
                        div {
                            class: "token-list",

                            if let Some(secret) = fresh_secret() {
                                div {
                                    class: "info-banner",
                                    "New token (copy it now, it will not be shown again): "
                                    code { "{secret}" }
                                }
                            }

                            for token in tokens() {
                                div {
                                    key: "{token.id}",
                                    class: "token-row",
                                    span { "{token.name}" }
                                    if let Some(expires) = token.expires_at.clone() {
                                        span { class: "token-expiry", "expires {expires}" }
                                    }
                                    button {
                                        class: "auth-link",
                                        onclick: {
                                            let handle_revoke = handle_revoke.clone();
                                            let id = token.id;
                                            move |_| handle_revoke(id)
                                        },
                                        "Revoke"
                                    }
                                }
                            }

                            form {
                                onsubmit: handle_create_token.clone(),
                                class: "token-create",

                                Input {
                                    placeholder: "Token name",
                                    value: token_name(),
                                    oninput: move |evt: FormEvent| token_name.set(evt.value()),
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    r#type: "submit",
                                    "Create token"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
