use api::ApiError;
use dioxus::prelude::*;
use store::{FieldErrors, RegisterForm};

use crate::components::{Button, ButtonVariant, Card, FieldError, Input, Label, PasswordInput};
use crate::{use_backend, use_navigation, Destination};

use super::backdrop::{Backdrop, AUTH_CURVE};
use super::page_title;

#[component]
pub fn Register() -> Element {
    let backend = use_backend();
    let navigation = use_navigation();
    let mut form = use_signal(RegisterForm::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(registration) = form.write().begin_submit() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.register(&registration).await;
            let succeeded = result.is_ok();
            match &result {
                Ok(()) => tracing::info!("Registered {}", registration.email),
                Err(e) => tracing::info!("Registration rejected: {e}"),
            }
            form.write().complete(result.map_err(ApiError::into_field_errors));
            if succeeded {
                navigation.go(Destination::Dashboard);
            }
        });
    };

    let current = form();
    let processing = current.status.processing;
    let error = |field: &str| current.status.error(field).map(str::to_string);
    let title = page_title("Sign up");

    rsx! {
        document::Title { "{title}" }
        div { class: "auth-screen",
            Backdrop { curve: AUTH_CURVE }
            Card { class: "auth-card", title: "Create your Fiscalis account",
                form { onsubmit: handle_register,
                    div { class: "form-fields",
                        div { class: "form-field",
                            Label { html_for: "name", "Full Name" }
                            Input {
                                id: "name",
                                placeholder: "Enter your full name",
                                required: true,
                                value: current.name.clone(),
                                oninput: move |evt: FormEvent| form.write().name = evt.value(),
                            }
                            FieldError { message: error("name") }
                        }
                        div { class: "form-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                placeholder: "Enter your email",
                                required: true,
                                value: current.email.clone(),
                                oninput: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                            FieldError { message: error("email") }
                        }
                        div { class: "form-field",
                            Label { html_for: "password", "Password" }
                            PasswordInput {
                                id: "password",
                                placeholder: "Create a password",
                                value: current.password.clone(),
                                visible: current.show_password,
                                oninput: move |evt: FormEvent| form.write().password = evt.value(),
                                on_toggle_visibility: move |_| form.write().toggle_password_visibility(),
                            }
                            FieldError { message: error("password") }
                        }
                        div { class: "form-field",
                            Label { html_for: "password_confirmation", "Confirm Password" }
                            Input {
                                id: "password_confirmation",
                                r#type: "password",
                                placeholder: "Confirm your password",
                                required: true,
                                value: current.password_confirmation.clone(),
                                oninput: move |evt: FormEvent| form.write().password_confirmation = evt.value(),
                            }
                            FieldError { message: error("password_confirmation") }
                        }
                        FieldError { message: error(FieldErrors::FORM) }
                        Button { r#type: "submit", class: "btn-block", disabled: processing,
                            if processing { "Creating account..." } else { "Create Account" }
                        }
                    }
                }
                p { class: "auth-switch",
                    "Already have an account? "
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| navigation.go(Destination::Login),
                        "Login"
                    }
                }
            }
        }
    }
}
