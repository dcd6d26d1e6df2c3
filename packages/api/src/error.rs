//! Errors returned by [`crate::ApiClient`].

use serde::Deserialize;
use store::Session;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401: bad credentials, or the token is no longer accepted.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// 403: signed in, but the role may not perform the action.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// FastAPI-style error body: `detail` is either a message or a list of
/// validation errors.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

/// Pull the human-readable detail out of an error body, if there is one.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let text = match parsed.detail {
        Detail::Message(message) => message,
        Detail::Validation(issues) => issues
            .into_iter()
            .map(|issue| issue.msg)
            .collect::<Vec<_>>()
            .join("; "),
    };
    (!text.trim().is_empty()).then_some(text)
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body).unwrap_or_default();
        match status {
            401 => ApiError::Unauthorized(detail),
            403 => ApiError::Forbidden(detail),
            404 => ApiError::NotFound(detail),
            _ => ApiError::Rejected { status, detail },
        }
    }

    /// Server-provided detail text, when the server sent one.
    pub fn detail(&self) -> Option<&str> {
        let detail = match self {
            ApiError::Unauthorized(d) | ApiError::Forbidden(d) | ApiError::NotFound(d) => d,
            ApiError::Rejected { detail, .. } => detail,
            ApiError::Transport(_) | ApiError::Decode(_) => return None,
        };
        (!detail.is_empty()).then_some(detail.as_str())
    }

    /// The detail if present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Whether `err` means the API no longer accepts `session`'s token.
///
/// Only a 401 on a request made with a token ends the session; a 401 from the
/// login form itself is just bad credentials, and a 403 is a role check.
pub fn rejects_session(err: &ApiError, session: &Session) -> bool {
    err.is_unauthorized() && session.is_authenticated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Role, UserInfo};

    fn signed_in() -> Session {
        Session::new(
            "tok".to_string(),
            UserInfo {
                id: 2,
                name: "Dev".to_string(),
                email: "dev@example.com".to_string(),
                role: Role::Developer,
                created_at: None,
            },
        )
    }

    #[test]
    fn test_string_detail() {
        let err = ApiError::from_response(400, r#"{"detail":"Email already registered"}"#);
        assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
        assert_eq!(err.detail(), Some("Email already registered"));
        assert_eq!(err.user_message("Failed to create user"), "Email already registered");
    }

    #[test]
    fn test_validation_detail_list() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
            {"loc":["body","name"],"msg":"field required","type":"missing"}
        ]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(
            err.detail(),
            Some("value is not a valid email address; field required")
        );
    }

    #[test]
    fn test_status_classification() {
        let err = ApiError::from_response(401, r#"{"detail":"Incorrect email or password"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Incorrect email or password"));

        assert!(matches!(ApiError::from_response(403, "{}"), ApiError::Forbidden(_)));
        assert!(matches!(
            ApiError::from_response(404, r#"{"detail":"Task not found"}"#),
            ApiError::NotFound(ref d) if d == "Task not found"
        ));
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Failed to save task"), "Failed to save task");
    }

    #[test]
    fn test_decode_error_has_no_detail() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.detail(), None);
        assert!(err.to_string().starts_with("invalid response"));
    }

    #[test]
    fn test_expired_token_ends_session() {
        let expired = ApiError::from_response(401, r#"{"detail":"Could not validate credentials"}"#);
        assert!(rejects_session(&expired, &signed_in()));
    }

    #[test]
    fn test_failed_login_keeps_signed_out_session() {
        let bad_credentials = ApiError::from_response(401, r#"{"detail":"Incorrect email or password"}"#);
        assert!(!rejects_session(&bad_credentials, &Session::default()));
    }

    #[test]
    fn test_other_errors_keep_session() {
        let session = signed_in();
        assert!(!rejects_session(&ApiError::from_response(403, "{}"), &session));
        assert!(!rejects_session(&ApiError::from_response(404, "{}"), &session));
        assert!(!rejects_session(&ApiError::from_response(500, ""), &session));
    }
}
