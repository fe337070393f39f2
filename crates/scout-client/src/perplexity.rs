//! Blocking deep-research client.

use serde::Serialize;

use scout_core::research::PerplexityResult;

use crate::{ApiClient, error::ApiError, http::check_response, http::read_json};

/// Request for a blocking deep-research completion.
#[derive(Debug, Clone, Serialize)]
pub struct PerplexityRequest {
    /// Free-text research query.
    pub query: String,
    /// Model override; the backend default is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Reasoning effort knob (`low` / `medium` / `high`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
}

impl PerplexityRequest {
    /// A request with just a query and backend defaults.
    #[must_use]
    pub const fn new(query: String) -> Self {
        Self {
            query,
            model: None,
            reasoning_effort: None,
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.query.trim().is_empty() {
            return Err(ApiError::Validation(
                "research query is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl ApiClient {
    /// Execute a deep-research query, blocking until the full response with
    /// citations and consulted sources is available.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty query, and [`ApiError`]
    /// if the HTTP request fails, the API returns a non-success status, or
    /// the response cannot be parsed.
    pub async fn perplexity_deep_research(
        &self,
        request: &PerplexityRequest,
    ) -> Result<PerplexityResult, ApiError> {
        request.validate()?;
        let url = self.url("/perplexity/deep-research");
        let resp = check_response(
            self.request(reqwest::Method::POST, &url)
                .json(request)
                .send()
                .await?,
        )
        .await?;
        read_json(resp).await
    }
}
