//! `/users/` endpoints. Creating and deleting users is Admin-only server-side.

use reqwest::Method;
use store::{NewUser, UserInfo};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserInfo>, ApiError> {
        let path = "/users/";
        self.fetch(path, self.request(Method::GET, path)).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserInfo, ApiError> {
        let path = "/users/";
        let builder = self.request(Method::POST, path).json(user);
        self.fetch(path, builder).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/users/{id}");
        self.execute(&path, self.request(Method::DELETE, &path)).await
    }
}
