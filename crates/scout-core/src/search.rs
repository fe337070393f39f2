//! Web-search response shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One web-search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    /// Content snippet extracted from the page.
    pub content: String,
    /// Relevance score in `[0, 1]`.
    pub score: f64,
    /// Full page content, present only when requested.
    #[serde(default)]
    pub raw_content: Option<String>,
}

/// An image hit, present only when image results were requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchImage {
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A full web-search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
    pub query: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    /// AI-generated answer summary, present only when requested.
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub images: Vec<SearchImage>,
    #[serde(default)]
    pub response_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::SearchResponse;

    #[test]
    fn optional_fields_default_when_absent() {
        let raw = r#"{"query": "rust async", "results": []}"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.query, "rust async");
        assert!(response.results.is_empty());
        assert!(response.answer.is_none());
        assert!(response.images.is_empty());
    }
}
