//! HTTP plumbing shared by every resource module.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::HubConfig;

use crate::error::ApiError;

/// Typed client for the ProjectHub REST API.
///
/// Cheap to clone; clones share the connection pool. The token, when set, is
/// sent as a bearer header on every request.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &HubConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Builder method to attach (or drop) the bearer token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(path, builder).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send and discard the body (e.g. `204 No Content`).
    pub(crate) async fn execute(&self, path: &str, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send(path, builder).await.map(|_| ())
    }

    async fn send(&self, path: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        tracing::debug!(path, "api request");
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "api request failed to send");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::warn!(path, status = status.as_u16(), error = %err, "api request rejected");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/tasks/"), "http://localhost:8000/tasks/");
        assert_eq!(client.url("users/4"), "http://localhost:8000/users/4");
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let anonymous = ApiClient::new("http://api.test");
        let req = anonymous.request(Method::GET, "/users/").build().unwrap();
        assert!(req.headers().get(reqwest::header::AUTHORIZATION).is_none());

        let signed_in = anonymous.with_token(Some("abc".to_string()));
        let req = signed_in.request(Method::GET, "/users/").build().unwrap();
        assert_eq!(
            req.headers()
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer abc")
        );
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let client = ApiClient::new("http://api.test").with_token(Some(String::new()));
        assert_eq!(client.token(), None);
    }

    #[test]
    fn test_from_config() {
        let config = HubConfig::default().with_base_url("https://hub.example.com/api/");
        let client = ApiClient::from_config(&config);
        assert_eq!(client.url("dashboard/"), "https://hub.example.com/api/dashboard/");
    }
}
