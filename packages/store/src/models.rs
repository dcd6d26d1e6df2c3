//! # Domain models shared by the API client and the UI
//!
//! These types mirror the JSON bodies exchanged with the ProjectHub REST API.
//! They are `Serialize + Deserialize` so the same structs are used for request
//! payloads, response bodies, and the persisted session record.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | A user as returned by the API (never includes the password). |
//! | [`NewUser`] | Payload for `POST /users/` and `POST /register`; the only place a password travels. |
//! | [`Project`] / [`ProjectDraft`] | A project with its team, and the create/update payload referencing members by id. |
//! | [`Task`] / [`TaskDraft`] / [`TaskUpdate`] / [`TaskPatch`] | A task, the create payload, the edit payload, and the partial status update sent from the developer board. |
//! | [`TaskFilter`] | Query filters accepted by `GET /tasks/`. |
//! | [`DashboardMetrics`] | Aggregates returned by `GET /dashboard/`. |
//! | [`Session`] | The client-held token plus user record. |
//!
//! Timestamps are naive (`NaiveDateTime`) because the API emits ISO-8601 values
//! without an offset.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Closed set of roles. The wire form is the capitalised name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Developer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Developer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Developer => "Developer",
        }
    }

    /// Parse the wire name. Anything else is an unknown role.
    pub fn parse(s: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three fixed task buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn parse(s: &str) -> Option<TaskStatus> {
        TaskStatus::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User information as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl UserInfo {
    /// Up to two uppercase initials, one per word of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Payload for creating a user. Registration always sends [`Role::Developer`];
/// the server enforces that regardless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

impl NewUser {
    pub fn registration(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            role: Role::Developer,
            password,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub team_members: Vec<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Create/update payload for a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub team_member_ids: Vec<i64>,
}

impl ProjectDraft {
    /// Prefill an edit form from an existing project.
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            team_member_ids: project.team_members.iter().map(|m| m.id).collect(),
        }
    }

    /// Add the member if absent, remove it otherwise.
    pub fn toggle_member(&mut self, user_id: i64) {
        if let Some(pos) = self.team_member_ids.iter().position(|id| *id == user_id) {
            self.team_member_ids.remove(pos);
        } else {
            self.team_member_ids.push(user_id);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    pub project_id: i64,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Full create payload, also the form's working copy. `assigned_to` and
/// `deadline` serialize as `null` when unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub project_id: i64,
    pub assigned_to: Option<i64>,
    pub deadline: Option<NaiveDateTime>,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            project_id: task.project_id,
            assigned_to: task.assigned_to,
            deadline: task.deadline,
        }
    }
}

/// Edit payload for `PUT /tasks/{id}`. A task cannot move to another
/// project, so there is no `project_id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assigned_to: Option<i64>,
    pub deadline: Option<NaiveDateTime>,
}

impl From<TaskDraft> for TaskUpdate {
    fn from(draft: TaskDraft) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            status: draft.status,
            assigned_to: draft.assigned_to,
            deadline: draft.deadline,
        }
    }
}

/// Partial update: only the fields that are `Some` are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// Filters accepted by `GET /tasks/`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub project_id: Option<i64>,
    pub assigned_to: Option<i64>,
}

impl TaskFilter {
    pub fn assigned_to(user_id: i64) -> Self {
        Self {
            assigned_to: Some(user_id),
            ..Self::default()
        }
    }

    /// Query-string pairs, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.project_id {
            pairs.push(("project_id", id.to_string()));
        }
        if let Some(id) = self.assigned_to {
            pairs.push(("assigned_to", id.to_string()));
        }
        pairs
    }

    /// Same predicate the API applies server-side.
    pub fn matches(&self, task: &Task) -> bool {
        self.project_id.map_or(true, |id| task.project_id == id)
            && self.assigned_to.map_or(true, |id| task.assigned_to == Some(id))
    }

    /// Keep only the tasks the filter selects, in order. Applied to listings
    /// so a board never shows tasks the request did not ask for.
    pub fn retain(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.retain(|task| self.matches(task));
        tasks
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_projects: u64,
    pub total_tasks: u64,
    pub overdue_tasks: u64,
    #[serde(default)]
    pub tasks_by_status: BTreeMap<String, u64>,
}

impl DashboardMetrics {
    /// Count for one status; a missing key counts as zero.
    pub fn count_for(&self, status: TaskStatus) -> u64 {
        self.tasks_by_status
            .get(status.as_str())
            .copied()
            .unwrap_or(0)
    }
}

/// The client-held authentication state.
///
/// `token` decides whether the user is signed in at all; `user` carries the
/// role. Either can be missing independently when the persisted record is
/// partial or was written by an older client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn new(token: String, user: UserInfo) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, assigned_to: Option<i64>) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            status: TaskStatus::Todo,
            project_id: 1,
            assigned_to,
            deadline: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_task_from_api_json() {
        let json = r#"{
            "id": 7,
            "title": "Write docs",
            "description": null,
            "status": "In Progress",
            "deadline": "2024-05-01T17:30:00",
            "project_id": 3,
            "assigned_to": null,
            "created_at": "2024-04-01T09:00:00.123456",
            "updated_at": "2024-04-02T09:00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assigned_to, None);
        assert_eq!(
            task.deadline.unwrap().format("%Y-%m-%d %H:%M").to_string(),
            "2024-05-01 17:30"
        );
    }

    #[test]
    fn test_task_draft_sends_explicit_nulls() {
        let draft = TaskDraft {
            title: "Fix login".to_string(),
            project_id: 2,
            ..TaskDraft::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["status"], "To Do");
        assert!(value["assigned_to"].is_null());
        assert!(value.as_object().unwrap().contains_key("deadline"));
    }

    #[test]
    fn test_task_patch_only_sends_status() {
        let value = serde_json::to_value(TaskPatch::status(TaskStatus::Done)).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "Done" }));
        let empty = serde_json::to_value(TaskPatch::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id": 1, "name": "X", "email": "x@example.com", "role": "Intern"}"#;
        assert!(serde_json::from_str::<UserInfo>(json).is_err());
        assert_eq!(Role::parse("Manager"), Some(Role::Manager));
        assert_eq!(Role::parse("manager"), None);
    }

    #[test]
    fn test_initials() {
        let user = UserInfo {
            id: 1,
            name: "ada byron lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Admin,
            created_at: None,
        };
        assert_eq!(user.initials(), "AB");
    }

    #[test]
    fn test_unassigned_task_excluded_by_assignee_filter() {
        let tasks = vec![task(1, None), task(2, Some(10)), task(3, Some(11))];

        assert_eq!(TaskFilter::default().retain(tasks.clone()).len(), 3);

        let mine = TaskFilter::assigned_to(11);
        let visible: Vec<i64> = mine.retain(tasks).into_iter().map(|t| t.id).collect();
        assert_eq!(visible, vec![3]);
        assert_eq!(mine.query_pairs(), vec![("assigned_to", "11".to_string())]);
    }

    #[test]
    fn test_task_update_leaves_project_alone() {
        let mut draft = TaskDraft::from_task(&task(4, Some(2)));
        draft.title = "Renamed".to_string();
        draft.assigned_to = None;

        let value = serde_json::to_value(TaskUpdate::from(draft)).unwrap();
        assert!(!value.as_object().unwrap().contains_key("project_id"));
        assert_eq!(value["title"], "Renamed");
        assert!(value["assigned_to"].is_null());
    }

    #[test]
    fn test_toggle_member() {
        let mut draft = ProjectDraft::default();
        draft.toggle_member(4);
        draft.toggle_member(5);
        draft.toggle_member(4);
        assert_eq!(draft.team_member_ids, vec![5]);
    }

    #[test]
    fn test_metrics_count_for_missing_status() {
        let json = r#"{"total_projects": 2, "total_tasks": 3, "overdue_tasks": 1,
                       "tasks_by_status": {"To Do": 2, "Done": 1}}"#;
        let metrics: DashboardMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.count_for(TaskStatus::Todo), 2);
        assert_eq!(metrics.count_for(TaskStatus::InProgress), 0);
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let session = Session {
            token: Some(String::new()),
            user: None,
        };
        assert!(!session.is_authenticated());
        assert!(!Session::default().is_authenticated());
    }
}
