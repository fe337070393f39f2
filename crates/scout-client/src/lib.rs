//! # scout-client
//!
//! HTTP clients for the Scout research and items APIs.
//!
//! One [`ApiClient`] talks to the backend that fronts the external
//! providers:
//! - deep-research jobs (submit / poll / cancel / blocking sync)
//! - blocking deep-research completions
//! - web search
//! - the Items persistence resource
//!
//! Each concern lives in its own module as an `impl ApiClient` block; shared
//! status-code checking and body decoding live in `http`.

pub mod gemini;
pub mod items;
pub mod perplexity;
pub mod tavily;

mod error;
mod http;

pub use error::ApiError;
pub use gemini::GeminiRequest;
pub use perplexity::PerplexityRequest;
pub use tavily::{SearchDepth, SearchRequest, SearchTopic};

use std::time::Duration;

/// HTTP client for the Scout backend API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// `base_url` should include any path prefix (e.g.
    /// `https://api.example.com/api/v1`); a trailing slash is trimmed.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("scout/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Absolute URL for an API path (which must start with `/`).
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A request builder with the bearer token applied when configured.
    pub(crate) fn request(
        &self,
        method: reqwest::Method,
        url: &str,
    ) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
