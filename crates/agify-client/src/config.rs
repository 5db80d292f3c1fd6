use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production endpoint of the age prediction service
pub const DEFAULT_BASE_URL: &str = "https://api.agify.io";

/// Environment variable overriding [`DEFAULT_BASE_URL`]
pub const BASE_URL_ENV: &str = "AGIFY_BASE_URL";

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = concat!("agify-qa/", env!("CARGO_PKG_VERSION"));

/// Static configuration for [`crate::AgifyClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Default configuration with the base URL taken from `AGIFY_BASE_URL` when set
    pub fn from_env() -> Self {
        Self::base_url_from_env()
            .map(Self::new)
            .unwrap_or_default()
    }

    /// The `AGIFY_BASE_URL` override, if it names anything
    pub fn base_url_from_env() -> Option<String> {
        Self::base_url_from(std::env::var(BASE_URL_ENV).ok())
    }

    /// Trims `raw`; blank values count as unset
    pub fn base_url_from(raw: Option<String>) -> Option<String> {
        raw.map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }

    /// Joins `path` onto the base URL, tolerating slashes on either side
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}
