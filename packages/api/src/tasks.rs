//! `/tasks/` endpoints.

use reqwest::{Method, RequestBuilder};
use store::{Task, TaskDraft, TaskFilter, TaskPatch, TaskUpdate};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, ApiError> {
        self.fetch("/tasks/", self.list_tasks_request(filter)).await
    }

    fn list_tasks_request(&self, filter: TaskFilter) -> RequestBuilder {
        self.request(Method::GET, "/tasks/")
            .query(&filter.query_pairs())
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let path = "/tasks/";
        let builder = self.request(Method::POST, path).json(draft);
        self.fetch(path, builder).await
    }

    pub async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ApiError> {
        let path = format!("/tasks/{id}");
        let builder = self.request(Method::PUT, &path).json(update);
        self.fetch(&path, builder).await
    }

    /// Partial update; the API accepts the same `PUT` with only some fields.
    pub async fn patch_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
        let path = format!("/tasks/{id}");
        let builder = self.request(Method::PUT, &path).json(patch);
        self.fetch(&path, builder).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/tasks/{id}");
        self.execute(&path, self.request(Method::DELETE, &path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_becomes_query_string() {
        let client = ApiClient::new("http://api.test");
        let filter = TaskFilter {
            project_id: Some(3),
            assigned_to: Some(9),
        };
        let req = client.list_tasks_request(filter).build().unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://api.test/tasks/?project_id=3&assigned_to=9"
        );
    }

    #[test]
    fn test_task_list_for_everyone_and_for_one_developer() {
        let client = ApiClient::new("http://api.test");

        // Unfiltered listing sends no filter, so unassigned tasks come back too.
        let req = client.list_tasks_request(TaskFilter::default()).build().unwrap();
        assert_eq!(req.url().query(), None);

        // The developer board asks only for the developer's own tasks.
        let req = client.list_tasks_request(TaskFilter::assigned_to(11)).build().unwrap();
        assert_eq!(req.url().query(), Some("assigned_to=11"));
    }
}
