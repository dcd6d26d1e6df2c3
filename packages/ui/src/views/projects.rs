use dioxus::prelude::*;
use store::{Project, ProjectDraft};

use super::modal_overlay::Dialog;
use super::widgets::{LoadError, Loading};
use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::notice::{confirm, notify, use_notices, NoticeLevel};
use crate::session::use_session;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(i64),
}

#[component]
pub fn ProjectsView() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut editor = use_signal(|| Editor::Closed);
    let mut draft = use_signal(ProjectDraft::default);

    let mut projects = use_resource(move || async move {
        session
            .check(session.client().list_projects().await)
            .await
            .map_err(|e| e.user_message("Failed to load projects"))
    });
    // Only feeds the team member checkboxes.
    let users = use_resource(move || async move {
        match session.check(session.client().list_users().await).await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to load users for team selection: {}", e);
                Vec::new()
            }
        }
    });

    let mut open_editor = move |project: Option<Project>| {
        match project {
            Some(p) => {
                draft.set(ProjectDraft::from_project(&p));
                editor.set(Editor::Edit(p.id));
            }
            None => {
                draft.set(ProjectDraft::default());
                editor.set(Editor::Create);
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut payload = draft();
        payload.name = payload.name.trim().to_string();
        if payload.name.is_empty() {
            notify(&mut notices, NoticeLevel::Error, "Project name is required");
            return;
        }
        let target = editor();
        spawn(async move {
            let client = session.client();
            let result = match target {
                Editor::Edit(id) => client.update_project(id, &payload).await,
                _ => client.create_project(&payload).await,
            };
            match session.check(result).await {
                Ok(project) => {
                    tracing::debug!(project_id = project.id, "project saved");
                    editor.set(Editor::Closed);
                    projects.restart();
                }
                Err(e) => notify(
                    &mut notices,
                    NoticeLevel::Error,
                    &e.user_message("Failed to save project"),
                ),
            }
        });
    };

    let handle_delete = move |project_id: i64| {
        if !confirm("Are you sure you want to delete this project?") {
            return;
        }
        spawn(async move {
            match session.check(session.client().delete_project(project_id).await).await {
                Ok(()) => projects.restart(),
                Err(e) => notify(
                    &mut notices,
                    NoticeLevel::Error,
                    &e.user_message("Failed to delete project"),
                ),
            }
        });
    };

    let list = match &*projects.read() {
        Some(Ok(list)) => list.clone(),
        Some(Err(e)) => return rsx! { LoadError { message: e.clone() } },
        None => return rsx! { Loading {} },
    };
    let candidates = users.read().clone().unwrap_or_default();
    let editing = matches!(editor(), Editor::Edit(_));
    let dialog_title = if editing { "Edit Project" } else { "Add New Project" };

    rsx! {
        div {
            div {
                class: "page-header",
                h2 { "Projects" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| open_editor(None),
                    "Add Project"
                }
            }

            div {
                class: "grid",
                for project in list {
                    div {
                        key: "{project.id}",
                        class: "card",
                        h3 { "{project.name}" }
                        p { {project.description.clone().unwrap_or_default()} }
                        div {
                            class: "card-section",
                            strong { "Team Members:" }
                            div {
                                class: "member-list",
                                if project.team_members.is_empty() {
                                    span { class: "view-muted", "No team members" }
                                }
                                for member in project.team_members.iter() {
                                    span { key: "{member.id}", class: "badge badge-developer", "{member.name}" }
                                }
                            }
                        }
                        div {
                            class: "action-buttons",
                            Button {
                                variant: ButtonVariant::Primary,
                                small: true,
                                onclick: {
                                    let project = project.clone();
                                    move |_| open_editor(Some(project.clone()))
                                },
                                "Edit"
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                small: true,
                                onclick: move |_| handle_delete(project.id),
                                "Delete"
                            }
                        }
                    }
                }
            }

            if editor() != Editor::Closed {
                Dialog {
                    title: dialog_title,
                    on_close: move |_| editor.set(Editor::Closed),
                    form {
                        onsubmit: handle_submit,
                        div {
                            class: "form-group",
                            Label { html_for: "project-name", "Project Name" }
                            Input {
                                id: "project-name",
                                r#type: "text",
                                required: true,
                                value: draft.read().name.clone(),
                                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "project-description", "Description" }
                            Textarea {
                                id: "project-description",
                                rows: "3",
                                value: draft.read().description.clone().unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    let value = evt.value();
                                    draft.write().description = (!value.trim().is_empty()).then_some(value);
                                },
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "project-team", "Team Members" }
                            div {
                                id: "project-team",
                                class: "checkbox-group",
                                for user in candidates {
                                    label {
                                        key: "{user.id}",
                                        class: "checkbox-item",
                                        input {
                                            r#type: "checkbox",
                                            checked: draft.read().team_member_ids.contains(&user.id),
                                            onchange: move |_| draft.write().toggle_member(user.id),
                                        }
                                        span { "{user.name} ({user.role})" }
                                    }
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            if editing { "Update Project" } else { "Create Project" }
                        }
                    }
                }
            }
        }
    }
}
