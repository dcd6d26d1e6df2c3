//! Sign-in and self-registration.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use store::{NewUser, Session, UserInfo};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Body returned by `POST /token`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserInfo,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl TokenResponse {
    pub fn into_session(self) -> Session {
        Session::new(self.access_token, self.user)
    }
}

impl ApiClient {
    /// Exchange credentials for a token. The form field is `username` even
    /// though it carries the email address.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let path = "/token";
        let builder = self
            .request(Method::POST, path)
            .form(&[("username", email), ("password", password)]);
        let response: TokenResponse = self.fetch(path, builder).await?;
        tracing::info!(user_id = response.user.id, role = %response.user.role, "signed in");
        Ok(response)
    }

    /// Create a Developer account. The server ignores any other role.
    pub async fn register(&self, user: &NewUser) -> Result<UserInfo, ApiError> {
        let path = "/register";
        let builder = self.request(Method::POST, path).json(user);
        self.fetch(path, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    #[test]
    fn test_token_response_into_session() {
        let json = r#"{
            "access_token": "eyJhbGciOi",
            "token_type": "bearer",
            "user": {"id": 2, "name": "Dana Cruz", "email": "dana@example.com",
                     "role": "Developer", "created_at": "2024-01-05T10:00:00"}
        }"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session();
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Developer));
        assert_eq!(session.user_id(), Some(2));
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let json = r#"{"access_token": "t",
                       "user": {"id": 1, "name": "A", "email": "a@example.com", "role": "Admin"}}"#;
        let response: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token_type, "bearer");
    }

    #[test]
    fn test_login_is_form_encoded() {
        let client = ApiClient::new("http://api.test");
        let req = client
            .request(Method::POST, "/token")
            .form(&[("username", "a@example.com"), ("password", "pw")])
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "http://api.test/token");
        assert_eq!(
            req.headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("application/x-www-form-urlencoded")
        );
        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"username=a%40example.com&password=pw");
    }
}
