use chrono::NaiveDateTime;
use dioxus::prelude::*;
use store::{is_overdue, server_now, Task, TaskBoard, TaskFilter, TaskPatch, TaskStatus};

use super::widgets::{LoadError, Loading, StatCard, StatusOptions};
use crate::forms::format_date;
use crate::notice::{notify, use_notices, NoticeLevel};
use crate::session::use_session;

/// The signed-in developer's own tasks as a three-column board.
#[component]
pub fn DeveloperDashboard() -> Element {
    let session = use_session();
    let mut notices = use_notices();

    let mut tasks = use_resource(move || async move {
        let Some(user_id) = session.user().map(|u| u.id) else {
            return Ok(Vec::new());
        };
        let filter = TaskFilter::assigned_to(user_id);
        session
            .check(session.client().list_tasks(filter).await)
            .await
            .map(|list| filter.retain(list))
            .map_err(|e| e.user_message("Failed to load your tasks"))
    });

    let update_status = move |(task_id, status): (i64, TaskStatus)| {
        spawn(async move {
            let patch = TaskPatch::status(status);
            match session.check(session.client().patch_task(task_id, &patch).await).await {
                Ok(_) => {
                    tasks.restart();
                    notify(&mut notices, NoticeLevel::Success, "Task status updated successfully!");
                }
                Err(e) => {
                    let message = e.user_message("Failed to update task");
                    notify(&mut notices, NoticeLevel::Error, &format!("Error updating task: {message}"));
                }
            }
        });
    };

    let board = match &*tasks.read() {
        Some(Ok(list)) => TaskBoard::partition(list.clone()),
        Some(Err(e)) => return rsx! { LoadError { message: e.clone() } },
        None => return rsx! { Loading {} },
    };

    let name = session.user().map(|u| u.name).unwrap_or_default();
    let now = server_now();

    rsx! {
        div {
            class: "developer-dashboard",
            h2 { "My Tasks" }
            p { class: "welcome-text", "Welcome back, {name}! Here are your assigned tasks." }

            div {
                class: "stats-grid",
                StatCard { value: board.total().to_string(), label: "Total Tasks" }
                StatCard { value: board.todo.len().to_string(), label: "To Do", tone: "stat-todo" }
                StatCard { value: board.in_progress.len().to_string(), label: "In Progress", tone: "stat-progress" }
                StatCard { value: board.done.len().to_string(), label: "Completed", tone: "stat-done" }
            }

            div {
                class: "tasks-board",
                for status in TaskStatus::ALL {
                    BoardColumn {
                        key: "{status}",
                        status,
                        tasks: board.column(status).to_vec(),
                        now,
                        on_status_change: update_status,
                    }
                }
            }

            if board.is_empty() {
                div {
                    class: "no-tasks-message",
                    h3 { "No tasks assigned yet" }
                    p { "Your manager will assign tasks to you soon." }
                }
            }
        }
    }
}

#[component]
fn BoardColumn(
    status: TaskStatus,
    tasks: Vec<Task>,
    now: NaiveDateTime,
    on_status_change: EventHandler<(i64, TaskStatus)>,
) -> Element {
    let (header_class, empty_text) = match status {
        TaskStatus::Todo => ("column-header todo-header", "No tasks to do"),
        TaskStatus::InProgress => ("column-header progress-header", "No tasks in progress"),
        TaskStatus::Done => ("column-header done-header", "No completed tasks"),
    };

    rsx! {
        div {
            class: "task-column",
            h3 { class: header_class, "{status} ({tasks.len()})" }
            if tasks.is_empty() {
                div { class: "empty-state", "{empty_text}" }
            }
            for task in tasks.clone() {
                div {
                    key: "{task.id}",
                    class: if task.status == TaskStatus::Done { "task-card task-completed" } else { "task-card" },
                    h4 { "{task.title}" }
                    p { {task.description.clone().unwrap_or_else(|| "No description".to_string())} }
                    if let Some(deadline) = task.deadline {
                        div {
                            class: if is_overdue(&task, now) { "task-deadline overdue" } else { "task-deadline" },
                            "Due: {format_date(deadline)}"
                        }
                    }
                    select {
                        class: "input status-select",
                        value: task.status.as_str(),
                        onchange: move |evt: FormEvent| {
                            if let Some(next) = TaskStatus::parse(&evt.value()) {
                                if next != task.status {
                                    on_status_change.call((task.id, next));
                                }
                            }
                        },
                        StatusOptions {}
                    }
                }
            }
        }
    }
}
