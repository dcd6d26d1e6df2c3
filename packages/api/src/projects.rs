//! `/projects/` endpoints.

use reqwest::Method;
use store::{Project, ProjectDraft};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let path = "/projects/";
        self.fetch(path, self.request(Method::GET, path)).await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let path = "/projects/";
        let builder = self.request(Method::POST, path).json(draft);
        self.fetch(path, builder).await
    }

    /// Full replacement, including the team member list.
    pub async fn update_project(&self, id: i64, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let path = format!("/projects/{id}");
        let builder = self.request(Method::PUT, &path).json(draft);
        self.fetch(&path, builder).await
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/projects/{id}");
        self.execute(&path, self.request(Method::DELETE, &path)).await
    }
}
