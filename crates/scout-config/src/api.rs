//! API backend configuration.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the research API backend (e.g., `https://api.example.com/api/v1`).
    #[serde(default)]
    pub base_url: String,

    /// Bearer token passed through on every request.
    #[serde(default)]
    pub token: String,

    /// Per-request timeout in seconds.
    ///
    /// Note: the synchronous deep-research call holds its connection for the
    /// whole job, so this should be generous when that path is used.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Check if the API config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}
