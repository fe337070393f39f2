//! Status enums, score tiers, and content kinds for Scout.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`JobStatus`] carries the terminal set that governs when polling must stop.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Status of an asynchronous deep-research job.
///
/// ```text
/// pending → running → completed
///                   → failed
///                   → cancelled
/// ```
///
/// `completed`, `failed`, and `cancelled` are terminal: once observed for a
/// job, no further transition occurs and polling must stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

/// The statuses after which a job never changes again.
pub const TERMINAL_STATUSES: &[JobStatus] = &[
    JobStatus::Completed,
    JobStatus::Failed,
    JobStatus::Cancelled,
];

impl JobStatus {
    /// Whether this status is in the terminal set.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        TERMINAL_STATUSES.contains(&self)
    }

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[
                Self::Running,
                Self::Completed,
                Self::Failed,
                Self::Cancelled,
            ],
            Self::Running => &[Self::Completed, Self::Failed, Self::Cancelled],
            Self::Completed | Self::Failed | Self::Cancelled => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScoreTier
// ---------------------------------------------------------------------------

/// Display tier for a relevance score in `[0, 1]`.
///
/// Fixed thresholds: `>= 0.70` strong, `>= 0.40` moderate, below weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Strong,
    Moderate,
    Weak,
}

impl ScoreTier {
    /// Map a relevance score to its display tier. Total on all finite inputs.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.70 {
            Self::Strong
        } else if score >= 0.40 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }

    /// Fixed color name used for the tier's badge in terminal output.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Strong => "green",
            Self::Moderate => "yellow",
            Self::Weak => "red",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContentKind
// ---------------------------------------------------------------------------

/// Content-type tag carried by saved items, used by the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Search,
    Extract,
    Crawl,
    Map,
    Perplexity,
    Gemini,
}

impl ContentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Extract => "extract",
            Self::Crawl => "crawl",
            Self::Map => "map",
            Self::Perplexity => "perplexity",
            Self::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "search" => Ok(Self::Search),
            "extract" => Ok(Self::Extract),
            "crawl" => Ok(Self::Crawl),
            "map" => Ok(Self::Map),
            "perplexity" => Ok(Self::Perplexity),
            "gemini" => Ok(Self::Gemini),
            other => Err(CoreError::Validation(format!(
                "unknown content type '{other}' (expected one of: search, extract, crawl, map, perplexity, gemini)"
            ))),
        }
    }
}
