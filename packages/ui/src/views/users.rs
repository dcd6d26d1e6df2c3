use dioxus::prelude::*;
use store::{Role, Viewer};

use super::modal_overlay::Dialog;
use super::widgets::{LoadError, Loading, RoleBadge};
use crate::components::{Button, ButtonVariant, Input, Label, Select};
use crate::forms::UserForm;
use crate::notice::{confirm, notify, use_notices, NoticeLevel};
use crate::session::use_session;

/// User list. Admins manage accounts here; managers get a read-only roster.
#[component]
pub fn UsersView() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut show_modal = use_signal(|| false);
    let mut user_form = use_signal(UserForm::default);

    let mut users = use_resource(move || async move {
        session
            .check(session.client().list_users().await)
            .await
            .map_err(|e| e.user_message("Failed to load users"))
    });

    let is_admin = session.viewer() == Viewer::Admin;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let new_user = match user_form.read().to_new_user() {
            Ok(user) => user,
            Err(message) => {
                notify(&mut notices, NoticeLevel::Error, &message);
                return;
            }
        };
        spawn(async move {
            match session.check(session.client().create_user(&new_user).await).await {
                Ok(_) => {
                    show_modal.set(false);
                    user_form.set(UserForm::default());
                    users.restart();
                }
                Err(e) => notify(
                    &mut notices,
                    NoticeLevel::Error,
                    &e.user_message("Failed to create user"),
                ),
            }
        });
    };

    let handle_delete = move |user_id: i64| {
        if !confirm("Are you sure you want to delete this user?") {
            return;
        }
        spawn(async move {
            match session.check(session.client().delete_user(user_id).await).await {
                Ok(()) => users.restart(),
                Err(e) => notify(
                    &mut notices,
                    NoticeLevel::Error,
                    &e.user_message("Failed to delete user"),
                ),
            }
        });
    };

    let list = match &*users.read() {
        Some(Ok(list)) => list.clone(),
        Some(Err(e)) => return rsx! { LoadError { message: e.clone() } },
        None => return rsx! { Loading {} },
    };

    rsx! {
        div {
            div {
                class: "page-header",
                h2 { if is_admin { "User Management" } else { "Team Members" } }
                if is_admin {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_modal.set(true),
                        "Add User"
                    }
                }
            }

            if !is_admin {
                p {
                    class: "view-muted",
                    "View all team members. Only Admins can create or delete users."
                }
            }

            div {
                class: "grid",
                for user in list {
                    div {
                        key: "{user.id}",
                        class: "list-item",
                        div {
                            class: "list-item-content",
                            h4 { "{user.name}" }
                            p { "{user.email}" }
                            RoleBadge { role: user.role }
                        }
                        if is_admin {
                            Button {
                                variant: ButtonVariant::Destructive,
                                small: true,
                                onclick: move |_| handle_delete(user.id),
                                "Delete"
                            }
                        }
                    }
                }
            }

            if show_modal() {
                Dialog {
                    title: "Add New User",
                    on_close: move |_| show_modal.set(false),
                    form {
                        onsubmit: handle_submit,
                        div {
                            class: "form-group",
                            Label { html_for: "user-name", "Name" }
                            Input {
                                id: "user-name",
                                r#type: "text",
                                required: true,
                                value: user_form.read().name.clone(),
                                oninput: move |evt: FormEvent| user_form.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "user-email", "Email" }
                            Input {
                                id: "user-email",
                                r#type: "email",
                                required: true,
                                value: user_form.read().email.clone(),
                                oninput: move |evt: FormEvent| user_form.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "user-role", "Role" }
                            Select {
                                id: "user-role",
                                value: user_form.read().role.as_str(),
                                onchange: move |evt: FormEvent| {
                                    if let Some(role) = Role::parse(&evt.value()) {
                                        user_form.write().role = role;
                                    }
                                },
                                for role in [Role::Developer, Role::Manager, Role::Admin] {
                                    option { key: "{role}", value: role.as_str(), "{role}" }
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "user-password", "Password" }
                            Input {
                                id: "user-password",
                                r#type: "password",
                                required: true,
                                placeholder: "Enter password",
                                value: user_form.read().password.clone(),
                                oninput: move |evt: FormEvent| user_form.write().password = evt.value(),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            "Create User"
                        }
                    }
                }
            }
        }
    }
}
