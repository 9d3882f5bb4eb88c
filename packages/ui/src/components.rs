//! Small form components shared by the views.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let button_type = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{button_type}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] class: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            class: "input {class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Red banner for surfacing the session's `error` state or a local form
/// validation message.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            "{message}"
        }
    }
}
