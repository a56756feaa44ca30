use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] required: bool,
    min: Option<String>,
    step: Option<String>,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            id: id,
            r#type: r#type,
            placeholder: placeholder,
            required: required,
            min: min,
            step: step,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// The first backend or local error for a field, if there is one.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", role: "alert", "{message}" }
        }
    }
}

/// Password entry with a show/hide toggle. The toggle only changes how the
/// value is displayed.
#[component]
pub fn PasswordInput(
    id: String,
    #[props(default)] placeholder: String,
    value: String,
    visible: bool,
    oninput: EventHandler<FormEvent>,
    on_toggle_visibility: EventHandler<()>,
) -> Element {
    let kind = if visible { "text" } else { "password" };
    let toggle_label = if visible { "Hide password" } else { "Show password" };

    rsx! {
        div { class: "password-input",
            Input {
                id: id,
                r#type: kind,
                placeholder: placeholder,
                required: true,
                value: value,
                oninput: move |evt| oninput.call(evt),
            }
            button {
                class: "password-toggle",
                r#type: "button",
                aria_label: toggle_label,
                onclick: move |_| on_toggle_visibility.call(()),
                if visible {
                    Icon { icon: FaEyeSlash, width: 16, height: 16 }
                } else {
                    Icon { icon: FaEye, width: 16, height: 16 }
                }
            }
        }
    }
}
