use dioxus::prelude::*;
use store::{Page, Role};

use super::widgets::{LoadError, Loading, RoleBadge, StatCard};
use crate::components::{Button, ButtonVariant, Input, Select};
use crate::forms::UserForm;
use crate::notice::{confirm, notify, use_notices, NoticeLevel};
use crate::session::use_session;

#[component]
pub fn AdminDashboard(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut show_form = use_signal(|| false);
    let mut user_form = use_signal(UserForm::default);

    let metrics = use_resource(move || async move {
        session
            .check(session.client().dashboard_metrics().await)
            .await
            .map_err(|e| e.user_message("Failed to load dashboard statistics"))
    });
    let mut users = use_resource(move || async move {
        session
            .check(session.client().list_users().await)
            .await
            .map_err(|e| e.user_message("Failed to load users"))
    });

    let handle_create = move |evt: FormEvent| {
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
                    user_form.set(UserForm::default());
                    show_form.set(false);
                    users.restart();
                    notify(&mut notices, NoticeLevel::Success, "User created successfully!");
                }
                Err(e) => {
                    let message = e.user_message("Failed to create user");
                    notify(&mut notices, NoticeLevel::Error, &format!("Error creating user: {message}"));
                }
            }
        });
    };

    let handle_delete = move |user_id: i64| {
        if !confirm("Are you sure you want to delete this user?") {
            return;
        }
        spawn(async move {
            match session.check(session.client().delete_user(user_id).await).await {
                Ok(()) => {
                    users.restart();
                    notify(&mut notices, NoticeLevel::Success, "User deleted successfully!");
                }
                Err(e) => {
                    let message = e.user_message("Failed to delete user");
                    notify(&mut notices, NoticeLevel::Error, &format!("Error deleting user: {message}"));
                }
            }
        });
    };

    let (metrics, user_list) = match (&*metrics.read(), &*users.read()) {
        (Some(Err(e)), _) | (_, Some(Err(e))) => return rsx! { LoadError { message: e.clone() } },
        (Some(Ok(m)), Some(Ok(u))) => (m.clone(), u.clone()),
        _ => return rsx! { Loading {} },
    };
    let toggle_variant = if show_form() {
        ButtonVariant::Outline
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        div {
            class: "admin-dashboard",
            h2 { "Admin Dashboard" }

            div {
                class: "stats-grid",
                StatCard { value: metrics.total_projects.to_string(), label: "Total Projects" }
                StatCard { value: metrics.total_tasks.to_string(), label: "Total Tasks" }
                StatCard { value: user_list.len().to_string(), label: "Total Users" }
                StatCard { value: metrics.overdue_tasks.to_string(), label: "Overdue Tasks" }
            }

            div {
                class: "dashboard-section",
                div {
                    class: "section-header",
                    h3 { "User Management" }
                    Button {
                        variant: toggle_variant,
                        onclick: move |_| show_form.set(!show_form()),
                        if show_form() { "Cancel" } else { "+ Create User" }
                    }
                }

                if show_form() {
                    form {
                        class: "inline-form",
                        onsubmit: handle_create,
                        Input {
                            r#type: "text",
                            required: true,
                            placeholder: "Name",
                            value: user_form.read().name.clone(),
                            oninput: move |evt: FormEvent| user_form.write().name = evt.value(),
                        }
                        Input {
                            r#type: "email",
                            required: true,
                            placeholder: "Email",
                            value: user_form.read().email.clone(),
                            oninput: move |evt: FormEvent| user_form.write().email = evt.value(),
                        }
                        Input {
                            r#type: "password",
                            required: true,
                            placeholder: "Password",
                            value: user_form.read().password.clone(),
                            oninput: move |evt: FormEvent| user_form.write().password = evt.value(),
                        }
                        Select {
                            value: user_form.read().role.as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Some(role) = Role::parse(&evt.value()) {
                                    user_form.write().role = role;
                                }
                            },
                            option { value: "Developer", "Developer" }
                            option { value: "Manager", "Manager" }
                            option { value: "Admin", "Admin" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            "Create User"
                        }
                    }
                }

                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in user_list {
                            tr {
                                key: "{user.id}",
                                td { "{user.name}" }
                                td { "{user.email}" }
                                td { RoleBadge { role: user.role } }
                                td {
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
                }
            }

            div {
                class: "quick-actions",
                button { class: "action-btn", onclick: move |_| on_navigate.call(Page::Projects), "Manage Projects" }
                button { class: "action-btn", onclick: move |_| on_navigate.call(Page::Tasks), "Manage Tasks" }
                button { class: "action-btn", onclick: move |_| on_navigate.call(Page::Users), "View All Users" }
            }
        }
    }
}
