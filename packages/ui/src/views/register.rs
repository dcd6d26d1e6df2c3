//! Self-registration. New accounts are always Developers.

use dioxus::prelude::*;
use store::{NewUser, Page};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::notice::{notify, use_notices, NoticeLevel};
use crate::session::use_session;

#[component]
pub fn RegisterView(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            if n.is_empty() || e.is_empty() || p.is_empty() {
                error.set(Some("Name, email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match session.client().register(&NewUser::registration(n, e, p)).await {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "registered");
                    loading.set(false);
                    notify(
                        &mut notices,
                        NoticeLevel::Success,
                        "Registration successful! Please sign in.",
                    );
                    on_navigate.call(Page::Login);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message("Registration failed. Please try again.")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h2 { "Create Account" }
                p { class: "auth-subtitle", "Join Project Hub as a developer" }

                if let Some(err) = error() {
                    div { class: "error", "{err}" }
                }

                form {
                    onsubmit: handle_register,

                    div {
                        class: "form-group",
                        Label { html_for: "register-name", "Full Name" }
                        Input {
                            id: "register-name",
                            r#type: "text",
                            required: true,
                            placeholder: "Enter your name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "register-email", "Email Address" }
                        Input {
                            id: "register-email",
                            r#type: "email",
                            required: true,
                            placeholder: "Enter your email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
                            r#type: "password",
                            required: true,
                            placeholder: "Choose a password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "button-block",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create Account" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    a {
                        href: Page::Login.path(),
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            on_navigate.call(Page::Login);
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
