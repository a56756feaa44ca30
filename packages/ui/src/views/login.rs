use api::ApiError;
use dioxus::prelude::*;
use store::{FieldErrors, LoginForm};

use crate::components::{Button, ButtonVariant, Card, FieldError, Input, Label, PasswordInput};
use crate::{use_backend, use_navigation, Destination};

use super::backdrop::{Backdrop, AUTH_CURVE};
use super::page_title;

#[component]
pub fn Login() -> Element {
    let backend = use_backend();
    let navigation = use_navigation();
    let mut form = use_signal(LoginForm::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(credentials) = form.write().begin_submit() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.login(&credentials).await;
            let succeeded = result.is_ok();
            if let Err(e) = &result {
                tracing::info!("Login rejected: {e}");
            }
            form.write().complete(result.map_err(ApiError::into_field_errors));
            if succeeded {
                navigation.go(Destination::Dashboard);
            }
        });
    };

    let current = form();
    let processing = current.status.processing;
    let title = page_title("Login");
    let recovery_available = Destination::ForgotPassword.is_available();

    rsx! {
        document::Title { "{title}" }
        div { class: "auth-screen",
            Backdrop { curve: AUTH_CURVE }
            Card { class: "auth-card", title: "Log in to Fiscalis",
                form { onsubmit: handle_login,
                    div { class: "form-fields",
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
                            FieldError { message: current.status.error("email").map(str::to_string) }
                        }
                        div { class: "form-field",
                            Label { html_for: "password", "Password" }
                            PasswordInput {
                                id: "password",
                                placeholder: "Enter your password",
                                value: current.password.clone(),
                                visible: current.show_password,
                                oninput: move |evt: FormEvent| form.write().password = evt.value(),
                                on_toggle_visibility: move |_| form.write().toggle_password_visibility(),
                            }
                            FieldError { message: current.status.error("password").map(str::to_string) }
                        }
                        FieldError { message: current.status.error(FieldErrors::FORM).map(str::to_string) }
                        Button { r#type: "submit", class: "btn-block", disabled: processing,
                            if processing { "Logging in..." } else { "Log In" }
                        }
                    }
                }
                p { class: "auth-switch",
                    Button {
                        variant: ButtonVariant::Link,
                        disabled: !recovery_available,
                        title: (!recovery_available).then(|| "Coming soon".to_string()),
                        onclick: move |_| navigation.go(Destination::ForgotPassword),
                        "Forgot password?"
                    }
                }
                p { class: "auth-switch",
                    "Don't have an account? "
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| navigation.go(Destination::Register),
                        "Sign up"
                    }
                }
            }
        }
    }
}
