//! Deep-research job client (submit / poll / cancel / blocking sync).

use serde::{Deserialize, Serialize};

use scout_core::job::JobHandle;
use scout_core::research::GeminiResult;

use crate::{ApiClient, error::ApiError, http::check_response, http::read_json};

/// Hard cap the backend enforces on the research query.
const QUERY_MAX_CHARS: usize = 50_000;

/// Request to start (or synchronously run) a deep-research job.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    /// Free-text research query, at most 50,000 characters.
    pub query: String,
    /// Ask the provider to emit internal-reasoning summaries alongside output.
    pub enable_thinking_summaries: bool,
    /// File-search store names to ground the research in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_search_store_names: Option<Vec<String>>,
    /// Previous interaction to continue from, for follow-up queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_interaction_id: Option<String>,
}

impl GeminiRequest {
    /// A request with just a query and default options.
    #[must_use]
    pub const fn new(query: String) -> Self {
        Self {
            query,
            enable_thinking_summaries: false,
            file_search_store_names: None,
            previous_interaction_id: None,
        }
    }

    /// Client-side validation applied before the request is sent.
    fn validate(&self) -> Result<(), ApiError> {
        if self.query.trim().is_empty() {
            return Err(ApiError::Validation(
                "research query is required".to_string(),
            ));
        }
        let chars = self.query.chars().count();
        if chars > QUERY_MAX_CHARS {
            return Err(ApiError::Validation(format!(
                "query is {chars} characters, maximum is {QUERY_MAX_CHARS}"
            )));
        }
        Ok(())
    }
}

/// Parse a comma-separated store-names field into a list.
///
/// Names are trimmed and empties dropped; `None` when nothing remains.
#[must_use]
pub fn parse_store_names(value: &str) -> Option<Vec<String>> {
    let names: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if names.is_empty() { None } else { Some(names) }
}

#[derive(Debug, Deserialize)]
struct JobStartResponse {
    interaction_id: String,
}

impl ApiClient {
    /// Submit a new deep-research job.
    ///
    /// Returns a handle for polling. Submission failures surface immediately;
    /// retrying is the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty or oversized query, and
    /// [`ApiError`] if the HTTP request fails, the API returns a non-success
    /// status, or the response cannot be parsed.
    pub async fn start_deep_research(
        &self,
        request: &GeminiRequest,
    ) -> Result<JobHandle, ApiError> {
        request.validate()?;
        let url = self.url("/gemini/deep-research");
        let resp = check_response(
            self.request(reqwest::Method::POST, &url)
                .json(request)
                .send()
                .await?,
        )
        .await?;

        let started: JobStartResponse = read_json(resp).await?;
        Ok(JobHandle::new(started.interaction_id))
    }

    /// Fetch the current state of a deep-research job.
    ///
    /// When the handle carries a `last_event_id` cursor, only events after it
    /// are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn poll_deep_research(&self, handle: &JobHandle) -> Result<GeminiResult, ApiError> {
        let mut url = self.url(&format!(
            "/gemini/deep-research/{}",
            urlencoding::encode(&handle.interaction_id)
        ));
        if let Some(cursor) = &handle.last_event_id {
            url.push_str(&format!("?last_event_id={}", urlencoding::encode(cursor)));
        }

        let resp = check_response(self.request(reqwest::Method::GET, &url).send().await?).await?;
        read_json(resp).await
    }

    /// Request out-of-band cancellation of a running job.
    ///
    /// Independent of any local polling: the job transitions to `cancelled`
    /// on the provider side, and a subsequent poll observes that terminal
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails or the API returns a
    /// non-success status.
    pub async fn cancel_deep_research(&self, interaction_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "/gemini/deep-research/{}/cancel",
            urlencoding::encode(interaction_id)
        ));
        check_response(self.request(reqwest::Method::POST, &url).send().await?).await?;
        Ok(())
    }

    /// Run deep research synchronously, holding the connection until the job
    /// completes.
    ///
    /// Alternative to the poll workflow when the caller accepts a long-held
    /// connection; the configured client timeout must cover the full job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty or oversized query, and
    /// [`ApiError`] if the HTTP request fails, the API returns a non-success
    /// status, or the response cannot be parsed.
    pub async fn deep_research_sync(
        &self,
        request: &GeminiRequest,
    ) -> Result<GeminiResult, ApiError> {
        request.validate()?;
        let url = self.url("/gemini/deep-research/sync");
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
