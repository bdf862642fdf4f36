//! Client configuration.

/// Endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the base endpoint.
pub const API_URL_ENV: &str = "WARDBOOK_API_URL";

/// Where the remote store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Build a config for an explicit base endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read the endpoint from the environment, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the patients collection resource.
    pub fn patients_url(&self) -> String {
        format!("{}/patients", self.base_url)
    }

    /// URL of a single patient resource.
    pub fn patient_url(&self, id: i64) -> String {
        format!("{}/patients/{}", self.base_url, id)
    }
}
