//! Small presentational pieces shared by the dashboards and CRUD views.

use dioxus::prelude::*;
use store::{Role, TaskStatus};

#[component]
pub fn StatCard(
    #[props(into)] value: String,
    #[props(into)] label: String,
    #[props(default, into)] tone: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card {tone}",
            h3 { "{value}" }
            p { "{label}" }
        }
    }
}

#[component]
pub fn RoleBadge(role: Role) -> Element {
    let class = match role {
        Role::Admin => "badge badge-admin",
        Role::Manager => "badge badge-manager",
        Role::Developer => "badge badge-developer",
    };
    rsx! {
        span { class: "{class}", "{role}" }
    }
}

#[component]
pub fn StatusBadge(status: TaskStatus) -> Element {
    rsx! {
        span { class: "badge {status_class(status)}", "{status}" }
    }
}

pub(crate) fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "badge-todo",
        TaskStatus::InProgress => "badge-in-progress",
        TaskStatus::Done => "badge-done",
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", "Loading..." }
    }
}

/// View-level fetch failure. The view renders nothing else.
#[component]
pub fn LoadError(#[props(into)] message: String) -> Element {
    rsx! {
        div { class: "error", "{message}" }
    }
}

/// `<option>` list for the three task statuses.
#[component]
pub fn StatusOptions() -> Element {
    rsx! {
        for status in TaskStatus::ALL {
            option { key: "{status}", value: "{status}", "{status}" }
        }
    }
}
