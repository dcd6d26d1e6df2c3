//! Email/password sign-in.

use dioxus::prelude::*;
use store::{login_redirect, Page};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::session::use_session;

/// Login page. Bad credentials are reported inline; success persists the
/// session and goes to the dashboard.
#[component]
pub fn LoginView(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the dashboard
    use_effect(move || {
        let state = session.state();
        if state.loading {
            return;
        }
        if let Some(target) = login_redirect(&state.session) {
            on_navigate.call(target);
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let e = email().trim().to_string();
            let p = password();
            match session.client().login(&e, &p).await {
                Ok(response) => {
                    session.sign_in(response).await;
                    loading.set(false);
                    on_navigate.call(Page::Dashboard);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message("Login failed. Please try again.")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h2 { "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to your account" }

                if let Some(err) = error() {
                    div { class: "error", "{err}" }
                }

                form {
                    onsubmit: handle_login,

                    div {
                        class: "form-group",
                        Label { html_for: "login-email", "Email Address" }
                        Input {
                            id: "login-email",
                            r#type: "email",
                            required: true,
                            placeholder: "Enter your email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            r#type: "password",
                            required: true,
                            placeholder: "Enter your password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "button-block",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Don't have an account? "
                    a {
                        href: Page::Register.path(),
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            on_navigate.call(Page::Register);
                        },
                        "Create one"
                    }
                }
            }
        }
    }
}
