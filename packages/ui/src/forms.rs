//! Form state for the create/edit dialogs.
//!
//! Inputs are edited as strings and converted to API payloads on submit, so a
//! half-typed value never reaches the models. Only "required" is checked; the
//! API does the rest.

use chrono::NaiveDateTime;
use store::{NewUser, Role, Task, TaskDraft, TaskStatus};

/// Format used by `<input type="datetime-local">`.
const DATETIME_INPUT: &str = "%Y-%m-%dT%H:%M";

/// Human-readable date for cards and tables.
pub fn format_date(value: NaiveDateTime) -> String {
    value.format("%b %-d, %Y").to_string()
}

pub fn datetime_input_value(value: NaiveDateTime) -> String {
    value.format(DATETIME_INPUT).to_string()
}

/// Parse a `datetime-local` value. Empty means no deadline.
pub fn parse_deadline(raw: &str) -> Result<Option<NaiveDateTime>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_INPUT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map(Some)
        .map_err(|_| format!("Invalid deadline: {raw}"))
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required(raw: &str, field: &str) -> Result<String, String> {
    optional_text(raw).ok_or_else(|| format!("{field} is required"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Developer,
        }
    }
}

impl UserForm {
    pub fn to_new_user(&self) -> Result<NewUser, String> {
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(NewUser {
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            role: self.role,
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Selected project id, empty until one is chosen.
    pub project_id: String,
    /// Selected assignee id, empty for "Unassigned".
    pub assigned_to: String,
    pub deadline: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            project_id: task.project_id.to_string(),
            assigned_to: task.assigned_to.map(|id| id.to_string()).unwrap_or_default(),
            deadline: task.deadline.map(datetime_input_value).unwrap_or_default(),
        }
    }

    pub fn to_draft(&self) -> Result<TaskDraft, String> {
        let title = required(&self.title, "Title")?;
        let project_id = self
            .project_id
            .parse::<i64>()
            .map_err(|_| "Select a project".to_string())?;
        let assigned_to = match self.assigned_to.as_str() {
            "" => None,
            raw => Some(
                raw.parse::<i64>()
                    .map_err(|_| format!("Invalid assignee: {raw}"))?,
            ),
        };
        Ok(TaskDraft {
            title,
            description: optional_text(&self.description),
            status: self.status,
            project_id,
            assigned_to,
            deadline: parse_deadline(&self.deadline)?,
        })
    }
}
