use dioxus::prelude::*;
use store::{Page, TaskFilter, TaskStatus};

use super::widgets::{LoadError, Loading, StatCard, StatusBadge};
use crate::components::{Button, ButtonVariant};
use crate::forms::format_date;
use crate::session::{use_config, use_session};

#[component]
pub fn ManagerDashboard(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let config = use_config();

    let metrics = use_resource(move || async move {
        session
            .check(session.client().dashboard_metrics().await)
            .await
            .map_err(|e| e.user_message("Failed to load dashboard statistics"))
    });
    let projects = use_resource(move || async move {
        session
            .check(session.client().list_projects().await)
            .await
            .map_err(|e| e.user_message("Failed to load projects"))
    });
    let tasks = use_resource(move || async move {
        session
            .check(session.client().list_tasks(TaskFilter::default()).await)
            .await
            .map_err(|e| e.user_message("Failed to load tasks"))
    });

    let (metrics, projects, tasks) = match (&*metrics.read(), &*projects.read(), &*tasks.read()) {
        (Some(Err(e)), _, _) | (_, Some(Err(e)), _) | (_, _, Some(Err(e))) => {
            return rsx! { LoadError { message: e.clone() } }
        }
        (Some(Ok(m)), Some(Ok(p)), Some(Ok(t))) => (m.clone(), p.clone(), t.clone()),
        _ => return rsx! { Loading {} },
    };

    let featured = projects.into_iter().take(config.dashboard.featured_projects);
    let recent = tasks.into_iter().take(config.dashboard.recent_tasks);

    rsx! {
        div {
            class: "manager-dashboard",
            h2 { "Manager Dashboard" }

            div {
                class: "stats-grid",
                StatCard { value: metrics.total_projects.to_string(), label: "Total Projects" }
                StatCard { value: metrics.total_tasks.to_string(), label: "Total Tasks" }
                StatCard {
                    value: metrics.count_for(TaskStatus::InProgress).to_string(),
                    label: "In Progress",
                }
                StatCard { value: metrics.overdue_tasks.to_string(), label: "Overdue Tasks" }
            }

            div {
                class: "dashboard-section",
                div {
                    class: "section-header",
                    h3 { "Projects Overview" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate.call(Page::Projects),
                        "+ Create Project"
                    }
                }
                div {
                    class: "projects-grid",
                    for project in featured {
                        div {
                            key: "{project.id}",
                            class: "project-card",
                            onclick: move |_| on_navigate.call(Page::Projects),
                            h4 { "{project.name}" }
                            p { {project.description.clone().unwrap_or_else(|| "No description".to_string())} }
                            div {
                                class: "project-meta",
                                "Team: {project.team_members.len()} members"
                            }
                        }
                    }
                }
            }

            div {
                class: "dashboard-section",
                div {
                    class: "section-header",
                    h3 { "Recent Tasks" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate.call(Page::Tasks),
                        "+ Create Task"
                    }
                }
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Status" }
                            th { "Assigned To" }
                            th { "Deadline" }
                        }
                    }
                    tbody {
                        for task in recent {
                            tr {
                                key: "{task.id}",
                                class: "clickable",
                                onclick: move |_| on_navigate.call(Page::Tasks),
                                td { "{task.title}" }
                                td { StatusBadge { status: task.status } }
                                td { {assignee_label(task.assigned_to)} }
                                td { {task.deadline.map(format_date).unwrap_or_else(|| "-".to_string())} }
                            }
                        }
                    }
                }
            }

            div {
                class: "quick-actions",
                button { class: "action-btn", onclick: move |_| on_navigate.call(Page::Projects), "Manage Projects" }
                button { class: "action-btn", onclick: move |_| on_navigate.call(Page::Tasks), "Manage All Tasks" }
                button { class: "action-btn", onclick: move |_| on_navigate.call(Page::Users), "View Team Members" }
            }
        }
    }
}

fn assignee_label(assigned_to: Option<i64>) -> String {
    match assigned_to {
        Some(id) => format!("User #{id}"),
        None => "Unassigned".to_string(),
    }
}
