//! Pure mappers from provider results to the savable-item shape.
//!
//! No network, no state: each mapper is a deterministic transform of one
//! provider response plus the original query string. Text fields are scrubbed
//! of unpaired surrogate escapes and truncated on character boundaries before
//! they reach the persistence layer.

use serde_json::{Map, json};

use crate::enums::ContentKind;
use crate::item::ItemCreate;
use crate::research::{GeminiResult, PerplexityResult};
use crate::text::{scrub_lone_surrogates, truncate_chars};

/// Query portion of a title is capped here, leaving room for the prefix.
const TITLE_QUERY_MAX: usize = 200;
/// Whole-title cap enforced by the Items resource.
const TITLE_MAX: usize = 255;
/// Description is the leading slice of the content.
const DESCRIPTION_MAX: usize = 255;

const NO_CONTENT_FALLBACK: &str = "No content available";

/// Build `"<prefix>: <query>"` within the title budget.
fn provider_title(prefix: &str, query: &str) -> String {
    let query = scrub_lone_surrogates(query);
    let title = format!("{prefix}: {}", truncate_chars(&query, TITLE_QUERY_MAX));
    truncate_chars(&title, TITLE_MAX).to_string()
}

/// Map a completed deep-research job result to a savable item.
///
/// Output segments are concatenated in provider order separated by blank
/// lines; thinking summaries, usage counters, and completion metadata are
/// carried in `item_metadata` for later inspection.
#[must_use]
pub fn map_gemini_result(result: &GeminiResult, query: &str) -> ItemCreate {
    let content = scrub_lone_surrogates(&result.combined_content());
    let thinking_summaries: Vec<String> = result
        .thinking_summaries()
        .iter()
        .map(|summary| scrub_lone_surrogates(summary))
        .collect();

    let content = if content.is_empty() {
        NO_CONTENT_FALLBACK.to_string()
    } else {
        content
    };

    let mut metadata = Map::new();
    metadata.insert("query".to_string(), json!(query));
    metadata.insert(
        "interaction_id".to_string(),
        json!(result.interaction_id),
    );
    metadata.insert("status".to_string(), json!(result.status));
    metadata.insert(
        "thinking_summaries".to_string(),
        json!(thinking_summaries),
    );
    metadata.insert("outputs_count".to_string(), json!(result.outputs.len()));
    metadata.insert("usage".to_string(), json!(result.usage));
    metadata.insert("completed_at".to_string(), json!(result.completed_at));
    metadata.insert("event_type".to_string(), json!(result.event_type));

    ItemCreate {
        title: provider_title("Gemini", query),
        description: Some(truncate_chars(&content, DESCRIPTION_MAX).to_string()),
        source_url: None,
        content: Some(content),
        content_type: Some(ContentKind::Gemini.as_str().to_string()),
        item_metadata: Some(metadata),
    }
}

/// Map a blocking deep-research response to a savable item.
///
/// Citations, consulted search results, related questions, and usage counters
/// are carried in `item_metadata`.
#[must_use]
pub fn map_perplexity_result(result: &PerplexityResult, query: &str) -> ItemCreate {
    let content = scrub_lone_surrogates(result.primary_content());
    let content = if content.is_empty() {
        NO_CONTENT_FALLBACK.to_string()
    } else {
        content
    };

    let mut metadata = Map::new();
    metadata.insert("query".to_string(), json!(query));
    metadata.insert("model".to_string(), json!(result.model));
    metadata.insert("response_id".to_string(), json!(result.id));
    metadata.insert("citations".to_string(), json!(result.citations));
    metadata.insert(
        "search_results".to_string(),
        json!(result.search_results),
    );
    metadata.insert(
        "related_questions".to_string(),
        json!(result.related_questions),
    );
    metadata.insert("images".to_string(), json!(result.images));
    metadata.insert("usage".to_string(), json!(result.usage));
    metadata.insert("created".to_string(), json!(result.created));

    ItemCreate {
        title: provider_title("Perplexity", query),
        description: Some(truncate_chars(&content, DESCRIPTION_MAX).to_string()),
        source_url: None,
        content: Some(content),
        content_type: Some(ContentKind::Perplexity.as_str().to_string()),
        item_metadata: Some(metadata),
    }
}

/// Map a single web-search hit to a savable item.
///
/// Unlike the research mappers this keeps the source URL, and prefers the
/// full page content over the snippet when it was fetched.
#[must_use]
pub fn map_search_result(
    result: &crate::search::SearchResult,
    query: &str,
) -> ItemCreate {
    let content = scrub_lone_surrogates(
        result
            .raw_content
            .as_deref()
            .unwrap_or(result.content.as_str()),
    );

    let mut metadata = Map::new();
    metadata.insert("query".to_string(), json!(query));
    metadata.insert("score".to_string(), json!(result.score));
    metadata.insert("url".to_string(), json!(result.url));

    ItemCreate {
        title: truncate_chars(&scrub_lone_surrogates(&result.title), TITLE_MAX).to_string(),
        description: Some(truncate_chars(&content, DESCRIPTION_MAX).to_string()),
        source_url: Some(result.url.clone()),
        content: Some(content),
        content_type: Some(ContentKind::Search.as_str().to_string()),
        item_metadata: Some(metadata),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{map_gemini_result, map_perplexity_result, map_search_result};
    use crate::enums::JobStatus;
    use crate::research::{
        GeminiOutput, GeminiResult, PerplexityChoice, PerplexityMessage, PerplexityResult,
        TokenUsage,
    };
    use crate::search::SearchResult;

    fn gemini(outputs: Vec<GeminiOutput>) -> GeminiResult {
        GeminiResult {
            interaction_id: "int-9".to_string(),
            status: JobStatus::Completed,
            outputs,
            usage: Some(TokenUsage {
                input_tokens: 10,
                output_tokens: 90,
                total_tokens: 100,
            }),
            completed_at: None,
            event_type: Some("final".to_string()),
            last_event_id: None,
        }
    }

    #[test]
    fn gemini_item_concatenates_segments_in_order() {
        let result = gemini(vec![
            GeminiOutput {
                content: Some("Alpha.".to_string()),
                thinking_summary: None,
            },
            GeminiOutput {
                content: Some("Beta.".to_string()),
                thinking_summary: Some("thought".to_string()),
            },
        ]);

        let item = map_gemini_result(&result, "ocean temperatures");
        assert_eq!(item.title, "Gemini: ocean temperatures");
        assert_eq!(item.content.as_deref(), Some("Alpha.\n\nBeta."));
        assert_eq!(item.description.as_deref(), Some("Alpha.\n\nBeta."));
        assert_eq!(item.content_type.as_deref(), Some("gemini"));

        let metadata = item.item_metadata.unwrap();
        assert_eq!(metadata["interaction_id"], "int-9");
        assert_eq!(metadata["outputs_count"], 2);
        assert_eq!(metadata["thinking_summaries"][0], "thought");
        assert_eq!(metadata["usage"]["total_tokens"], 100);
    }

    #[test]
    fn gemini_item_falls_back_when_no_segments_carry_content() {
        let result = gemini(vec![GeminiOutput {
            content: None,
            thinking_summary: Some("only thoughts".to_string()),
        }]);

        let item = map_gemini_result(&result, "q");
        assert_eq!(item.content.as_deref(), Some("No content available"));
    }

    #[test]
    fn long_query_title_is_capped_and_char_boundary_safe() {
        // 300 two-byte codepoints: byte-indexed slicing would panic mid-char.
        let query: String = "é".repeat(300);
        let item = map_gemini_result(&gemini(Vec::new()), &query);

        assert!(item.title.chars().count() <= 255);
        assert!(item.title.starts_with("Gemini: "));
        // Prefix (8 chars) + query capped at 200 chars.
        assert_eq!(item.title.chars().count(), 208);
    }

    #[test]
    fn description_is_leading_slice_of_content() {
        let long_content = "x".repeat(600);
        let result = gemini(vec![GeminiOutput {
            content: Some(long_content.clone()),
            thinking_summary: None,
        }]);

        let item = map_gemini_result(&result, "q");
        assert_eq!(item.description.as_deref().unwrap().len(), 255);
        assert_eq!(item.content.as_deref(), Some(long_content.as_str()));
    }

    #[test]
    fn perplexity_item_keeps_citations_in_metadata() {
        let result = PerplexityResult {
            id: "resp-3".to_string(),
            model: "sonar-deep-research".to_string(),
            created: 1_700_000_123,
            choices: vec![PerplexityChoice {
                index: 0,
                finish_reason: None,
                message: PerplexityMessage {
                    role: "assistant".to_string(),
                    content: "Findings body.".to_string(),
                },
            }],
            citations: vec!["https://example.com/src".to_string()],
            search_results: Vec::new(),
            related_questions: vec!["follow-up?".to_string()],
            images: Vec::new(),
            usage: None,
        };

        let item = map_perplexity_result(&result, "deep dive");
        assert_eq!(item.title, "Perplexity: deep dive");
        assert_eq!(item.content.as_deref(), Some("Findings body."));
        assert_eq!(item.content_type.as_deref(), Some("perplexity"));

        let metadata = item.item_metadata.unwrap();
        assert_eq!(metadata["citations"][0], "https://example.com/src");
        assert_eq!(metadata["related_questions"][0], "follow-up?");
        assert_eq!(metadata["created"], 1_700_000_123);
    }

    #[test]
    fn perplexity_item_falls_back_when_choices_empty() {
        let result = PerplexityResult {
            id: "resp-4".to_string(),
            model: "sonar".to_string(),
            created: 0,
            choices: Vec::new(),
            citations: Vec::new(),
            search_results: Vec::new(),
            related_questions: Vec::new(),
            images: Vec::new(),
            usage: None,
        };

        let item = map_perplexity_result(&result, "q");
        assert_eq!(item.content.as_deref(), Some("No content available"));
    }

    #[test]
    fn search_item_prefers_raw_content_and_keeps_url() {
        let result = SearchResult {
            title: "Ocean heat content".to_string(),
            url: "https://example.com/ocean".to_string(),
            content: "snippet".to_string(),
            score: 0.91,
            raw_content: Some("full page text".to_string()),
        };

        let item = map_search_result(&result, "ocean temperatures");
        assert_eq!(item.source_url.as_deref(), Some("https://example.com/ocean"));
        assert_eq!(item.content.as_deref(), Some("full page text"));
        assert_eq!(item.content_type.as_deref(), Some("search"));
    }
}
