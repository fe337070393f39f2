//! Deep-research provider result shapes and their normalization.
//!
//! Each provider returns its own response shape; [`ResearchResult`] tags them
//! into one union, and [`ResearchResult::normalize`] produces the single
//! canonical shape the presentation layer consumes. Presentation code never
//! matches on provider-specific structure directly.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ContentKind, JobStatus};

/// Token-usage counters reported by a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

// ---------------------------------------------------------------------------
// Gemini (asynchronous job provider)
// ---------------------------------------------------------------------------

/// One output segment of a deep-research job: streamed text plus an optional
/// internal-reasoning summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeminiOutput {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub thinking_summary: Option<String>,
}

/// Accumulated state of a deep-research job as returned by a status fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeminiResult {
    pub interaction_id: String,
    pub status: JobStatus,
    /// Output segments in the order the provider produced them.
    #[serde(default)]
    pub outputs: Vec<GeminiOutput>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub event_type: Option<String>,
    /// Cursor to resume incremental polling from.
    #[serde(default)]
    pub last_event_id: Option<String>,
}

impl GeminiResult {
    /// Output segments joined by blank lines, in provider order.
    #[must_use]
    pub fn combined_content(&self) -> String {
        self.outputs
            .iter()
            .filter_map(|output| output.content.as_deref())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Internal-reasoning summaries, in provider order.
    #[must_use]
    pub fn thinking_summaries(&self) -> Vec<String> {
        self.outputs
            .iter()
            .filter_map(|output| output.thinking_summary.clone())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Perplexity (blocking completion provider)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PerplexityMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PerplexityChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub message: PerplexityMessage,
}

/// One web source consulted during a Perplexity completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PerplexitySearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Completed deep-research response from the blocking provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PerplexityResult {
    pub id: String,
    pub model: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub choices: Vec<PerplexityChoice>,
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(default)]
    pub search_results: Vec<PerplexitySearchResult>,
    #[serde(default)]
    pub related_questions: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl PerplexityResult {
    /// Main answer text: content of the first choice, empty if none.
    #[must_use]
    pub fn primary_content(&self) -> &str {
        self.choices
            .first()
            .map_or("", |choice| choice.message.content.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tagged union + canonical display shape
// ---------------------------------------------------------------------------

/// A deep-research result from either provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum ResearchResult {
    Gemini(GeminiResult),
    Perplexity(PerplexityResult),
}

/// The one canonical shape presentation code renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResearchDisplay {
    pub provider: ContentKind,
    pub status: JobStatus,
    /// Combined markdown body.
    pub content: String,
    /// Internal-reasoning summaries, when the provider exposes them.
    pub reasoning: Vec<String>,
    pub citations: Vec<String>,
    pub usage: Option<TokenUsage>,
}

impl ResearchResult {
    /// Which provider produced this result.
    #[must_use]
    pub const fn provider(&self) -> ContentKind {
        match self {
            Self::Gemini(_) => ContentKind::Gemini,
            Self::Perplexity(_) => ContentKind::Perplexity,
        }
    }

    /// Normalize either provider shape into the canonical display shape.
    ///
    /// A blocking-provider response is by definition complete, so its status
    /// is always `completed`.
    #[must_use]
    pub fn normalize(&self) -> ResearchDisplay {
        match self {
            Self::Gemini(result) => ResearchDisplay {
                provider: ContentKind::Gemini,
                status: result.status,
                content: result.combined_content(),
                reasoning: result.thinking_summaries(),
                citations: Vec::new(),
                usage: result.usage.clone(),
            },
            Self::Perplexity(result) => ResearchDisplay {
                provider: ContentKind::Perplexity,
                status: JobStatus::Completed,
                content: result.primary_content().to_string(),
                reasoning: Vec::new(),
                citations: result.citations.clone(),
                usage: result.usage.clone(),
            },
        }
    }
}
