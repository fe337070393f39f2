//! Web-search client.

use serde::Serialize;

use scout_core::search::SearchResponse;

use crate::{ApiClient, error::ApiError, http::check_response, http::read_json};

/// Maximum results the search API accepts per query.
const MAX_RESULTS_CAP: u32 = 20;

/// Search depth: advanced is more comprehensive but slower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

/// Search topic category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTopic {
    #[default]
    General,
    News,
}

/// A web-search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub search_depth: SearchDepth,
    pub topic: SearchTopic,
    /// Clamped to `1..=20` before sending.
    pub max_results: u32,
    pub include_answer: bool,
    pub include_images: bool,
    /// Only meaningful when `include_images` is set.
    pub include_image_descriptions: bool,
    pub include_raw_content: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_domains: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_domains: Vec<String>,
}

impl SearchRequest {
    /// A request with just a query and API defaults.
    #[must_use]
    pub const fn new(query: String) -> Self {
        Self {
            query,
            search_depth: SearchDepth::Basic,
            topic: SearchTopic::General,
            max_results: 5,
            include_answer: false,
            include_images: false,
            include_image_descriptions: false,
            include_raw_content: false,
            include_domains: Vec::new(),
            exclude_domains: Vec::new(),
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.query.trim().is_empty() {
            return Err(ApiError::Validation("search query is required".to_string()));
        }
        Ok(())
    }
}

impl ApiClient {
    /// Perform a web search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty query, and [`ApiError`]
    /// if the HTTP request fails, the API returns a non-success status, or
    /// the response cannot be parsed.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        request.validate()?;
        let mut request = request.clone();
        request.max_results = request.max_results.clamp(1, MAX_RESULTS_CAP);

        let url = self.url("/tavily/search");
        let resp = check_response(
            self.request(reqwest::Method::POST, &url)
                .json(&request)
                .send()
                .await?,
        )
        .await?;
        read_json(resp).await
    }
}
