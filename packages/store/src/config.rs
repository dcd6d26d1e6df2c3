//! # Client configuration: `projecthub.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//!
//! [dashboard]
//! featured_projects = 4   # project cards on the manager dashboard
//! recent_tasks = 5        # rows in the manager's recent-task table
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is the default
//! configuration. The default API URL can be baked in at compile time with the
//! `PROJECTHUB_API_URL` environment variable.

use serde::{Deserialize, Serialize};

const FALLBACK_API_URL: &str = "http://localhost:8000";

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("PROJECTHUB_API_URL")
        .unwrap_or(FALLBACK_API_URL)
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_featured_projects")]
    pub featured_projects: usize,
    #[serde(default = "default_recent_tasks")]
    pub recent_tasks: usize,
}

fn default_featured_projects() -> usize {
    4
}

fn default_recent_tasks() -> usize {
    5
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            featured_projects: default_featured_projects(),
            recent_tasks: default_recent_tasks(),
        }
    }
}

impl HubConfig {
    /// Builder method to point at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "projecthub.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = HubConfig::from_toml("").unwrap();
        assert_eq!(config, HubConfig::default());
        assert_eq!(config.dashboard.recent_tasks, 5);
        assert_eq!(config.dashboard.featured_projects, 4);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = HubConfig::from_toml(
            r#"
            [dashboard]
            recent_tasks = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.dashboard.recent_tasks, 10);
        assert_eq!(config.dashboard.featured_projects, 4);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = HubConfig::default().with_base_url("https://hub.example.com");
        let text = config.to_toml().unwrap();
        assert!(text.contains("https://hub.example.com"));
        assert_eq!(HubConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(HubConfig::from_toml("[dashboard]\nrecent_tasks = \"five\"").is_err());
    }
}
