use dioxus::prelude::*;
use store::{
    is_overdue, server_now, Project, Task, TaskFilter, TaskStatus, TaskUpdate, UserInfo,
};

use super::modal_overlay::Dialog;
use super::widgets::{LoadError, Loading, StatusBadge, StatusOptions};
use crate::components::{Button, ButtonVariant, Input, Label, Select, Textarea};
use crate::forms::{format_date, TaskForm};
use crate::notice::{confirm, notify, use_notices, NoticeLevel};
use crate::session::use_session;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(i64),
}

fn project_name(projects: &[Project], id: i64) -> String {
    projects
        .iter()
        .find(|p| p.id == id)
        .map_or_else(|| "Unknown".to_string(), |p| p.name.clone())
}

fn user_name(users: &[UserInfo], id: Option<i64>) -> String {
    id.and_then(|id| users.iter().find(|u| u.id == id))
        .map_or_else(|| "Unassigned".to_string(), |u| u.name.clone())
}

#[component]
pub fn TasksView() -> Element {
    let session = use_session();
    let mut notices = use_notices();
    let mut editor = use_signal(|| Editor::Closed);
    let mut task_form = use_signal(TaskForm::default);

    let mut tasks = use_resource(move || async move {
        session
            .check(session.client().list_tasks(TaskFilter::default()).await)
            .await
            .map_err(|e| e.user_message("Failed to load tasks"))
    });
    // Lookups for names and the dialog's selects.
    let projects = use_resource(move || async move {
        match session.check(session.client().list_projects().await).await {
            Ok(projects) => projects,
            Err(e) => {
                tracing::warn!("Failed to load projects for task lookup: {}", e);
                Vec::new()
            }
        }
    });
    let users = use_resource(move || async move {
        match session.check(session.client().list_users().await).await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to load users for task lookup: {}", e);
                Vec::new()
            }
        }
    });

    let mut open_editor = move |task: Option<Task>| match task {
        Some(t) => {
            task_form.set(TaskForm::from_task(&t));
            editor.set(Editor::Edit(t.id));
        }
        None => {
            task_form.set(TaskForm::default());
            editor.set(Editor::Create);
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = match task_form.read().to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                notify(&mut notices, NoticeLevel::Error, &message);
                return;
            }
        };
        let target = editor();
        spawn(async move {
            let client = session.client();
            let result = match target {
                Editor::Edit(id) => client.update_task(id, &TaskUpdate::from(draft)).await,
                _ => client.create_task(&draft).await,
            };
            match session.check(result).await {
                Ok(task) => {
                    tracing::debug!(task_id = task.id, "task saved");
                    editor.set(Editor::Closed);
                    tasks.restart();
                }
                Err(e) => notify(
                    &mut notices,
                    NoticeLevel::Error,
                    &e.user_message("Failed to save task"),
                ),
            }
        });
    };

    let handle_delete = move |task_id: i64| {
        if !confirm("Are you sure you want to delete this task?") {
            return;
        }
        spawn(async move {
            match session.check(session.client().delete_task(task_id).await).await {
                Ok(()) => tasks.restart(),
                Err(e) => notify(
                    &mut notices,
                    NoticeLevel::Error,
                    &e.user_message("Failed to delete task"),
                ),
            }
        });
    };

    let list = match &*tasks.read() {
        Some(Ok(list)) => list.clone(),
        Some(Err(e)) => return rsx! { LoadError { message: e.clone() } },
        None => return rsx! { Loading {} },
    };
    let project_list = projects.read().clone().unwrap_or_default();
    let user_list = users.read().clone().unwrap_or_default();
    let now = server_now();
    let editing = matches!(editor(), Editor::Edit(_));
    let dialog_title = if editing { "Edit Task" } else { "Add New Task" };

    rsx! {
        div {
            div {
                class: "page-header",
                h2 { "Tasks" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| open_editor(None),
                    "Add Task"
                }
            }

            div {
                class: "grid",
                for task in list {
                    div {
                        key: "{task.id}",
                        class: "card",
                        div {
                            class: "card-title-row",
                            h3 { "{task.title}" }
                            StatusBadge { status: task.status }
                        }
                        p { class: "view-muted", {task.description.clone().unwrap_or_default()} }
                        div {
                            class: "card-section",
                            div {
                                strong { "Project: " }
                                {project_name(&project_list, task.project_id)}
                            }
                            div {
                                strong { "Assigned to: " }
                                {user_name(&user_list, task.assigned_to)}
                            }
                            if let Some(deadline) = task.deadline {
                                div {
                                    class: if is_overdue(&task, now) { "overdue" } else { "" },
                                    strong { "Deadline: " }
                                    {format_date(deadline)}
                                }
                            }
                        }
                        div {
                            class: "action-buttons",
                            Button {
                                variant: ButtonVariant::Primary,
                                small: true,
                                onclick: {
                                    let task = task.clone();
                                    move |_| open_editor(Some(task.clone()))
                                },
                                "Edit"
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                small: true,
                                onclick: move |_| handle_delete(task.id),
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
                            Label { html_for: "task-title", "Title" }
                            Input {
                                id: "task-title",
                                r#type: "text",
                                required: true,
                                value: task_form.read().title.clone(),
                                oninput: move |evt: FormEvent| task_form.write().title = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "task-description", "Description" }
                            Textarea {
                                id: "task-description",
                                rows: "3",
                                value: task_form.read().description.clone(),
                                oninput: move |evt: FormEvent| task_form.write().description = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "task-project", "Project" }
                            Select {
                                id: "task-project",
                                required: true,
                                disabled: editing,
                                value: task_form.read().project_id.clone(),
                                onchange: move |evt: FormEvent| task_form.write().project_id = evt.value(),
                                option { value: "", "Select a project" }
                                for project in project_list.iter() {
                                    option { key: "{project.id}", value: "{project.id}", "{project.name}" }
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "task-assignee", "Assign to" }
                            Select {
                                id: "task-assignee",
                                value: task_form.read().assigned_to.clone(),
                                onchange: move |evt: FormEvent| task_form.write().assigned_to = evt.value(),
                                option { value: "", "Unassigned" }
                                for user in user_list.iter() {
                                    option { key: "{user.id}", value: "{user.id}", "{user.name}" }
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "task-status", "Status" }
                            Select {
                                id: "task-status",
                                value: task_form.read().status.as_str(),
                                onchange: move |evt: FormEvent| {
                                    if let Some(status) = TaskStatus::parse(&evt.value()) {
                                        task_form.write().status = status;
                                    }
                                },
                                StatusOptions {}
                            }
                        }
                        div {
                            class: "form-group",
                            Label { html_for: "task-deadline", "Deadline" }
                            Input {
                                id: "task-deadline",
                                r#type: "datetime-local",
                                value: task_form.read().deadline.clone(),
                                oninput: move |evt: FormEvent| task_form.write().deadline = evt.value(),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            if editing { "Update Task" } else { "Create Task" }
                        }
                    }
                }
            }
        }
    }
}
