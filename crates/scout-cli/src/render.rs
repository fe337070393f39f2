//! Human-readable rendering for research results and search hits.
//!
//! Pure functions of their inputs: truncation budgets, score badges, and the
//! empty-state texts live here so they can be tested without a terminal.

use std::fmt::Write as _;

use scout_core::enums::ScoreTier;
use scout_core::research::{ResearchDisplay, TokenUsage};
use scout_core::search::SearchResponse;
use scout_core::text::truncate_chars;

/// Character budget for result titles in the card view.
const TITLE_BUDGET: usize = 60;
/// Character budget for URLs in the card view.
const URL_BUDGET: usize = 50;
/// Character budget for content snippets in the card view.
const SNIPPET_BUDGET: usize = 150;

/// Truncation marker appended when a value was cut.
const MARKER: char = '…';

/// Truncate plain text to `max` characters plus the marker.
#[must_use]
pub fn truncate_text(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    format!("{}{MARKER}", truncate_chars(value, max))
}

/// Truncate a URL while preserving its most identifying prefix, the host.
///
/// The scheme is dropped and the path is cut to fit; the host always
/// survives in full unless it alone exceeds the budget. Strings that do not
/// look like URLs fall back to plain prefix truncation. Output length is at
/// most `max` plus the marker.
#[must_use]
pub fn truncate_url(url: &str, max: usize) -> String {
    if url.chars().count() <= max {
        return url.to_string();
    }

    let Some((host, path)) = host_and_path(url) else {
        return format!("{}{MARKER}", truncate_chars(url, max));
    };

    let host_len = host.chars().count();
    if host_len >= max {
        return format!("{}{MARKER}", truncate_chars(host, max));
    }

    let remaining = max - host_len;
    if path.chars().count() > remaining {
        format!("{host}{}{MARKER}", truncate_chars(path, remaining))
    } else {
        format!("{host}{path}")
    }
}

/// Split a URL into host and everything after it. `None` when there is no
/// scheme separator to anchor on.
fn host_and_path(url: &str) -> Option<(&str, &str)> {
    let (_, rest) = url.split_once("://")?;
    match rest.find('/') {
        Some(index) => Some((&rest[..index], &rest[index..])),
        None => Some((rest, "")),
    }
}

/// Badge text for a relevance score: rounded percent plus tier label.
#[must_use]
pub fn score_badge(score: f64) -> String {
    let tier = ScoreTier::from_score(score);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (score * 100.0).round() as u32;
    format!("{percent}% {tier}")
}

/// The zero-results view.
#[must_use]
pub fn search_empty_state(query: &str) -> String {
    format!("No results found\n\nNo results found for \"{query}\". Try a different search term.")
}

/// The empty items listing, aware of an active content-type filter.
#[must_use]
pub fn items_empty_state(content_type: Option<&str>) -> String {
    match content_type {
        Some(kind) => format!("No {kind} items found. Try a different filter or add new items."),
        None => "You don't have any items yet. Save a research result to get started.".to_string(),
    }
}

/// Render a search response: the empty state for zero results, otherwise a
/// metadata header followed by one card per result and any image hits.
#[must_use]
pub fn render_search_response(response: &SearchResponse) -> String {
    if response.results.is_empty() {
        return search_empty_state(&response.query);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} result(s) for \"{}\"",
        response.results.len(),
        response.query
    );
    if let Some(answer) = &response.answer {
        let _ = writeln!(out, "\nAnswer: {answer}");
    }

    for (index, result) in response.results.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. {}  [{}]\n   {}\n   {}\n",
            index + 1,
            truncate_text(&result.title, TITLE_BUDGET),
            score_badge(result.score),
            truncate_url(&result.url, URL_BUDGET),
            truncate_text(&result.content, SNIPPET_BUDGET),
        );
    }

    if !response.images.is_empty() {
        let _ = write!(out, "\nImages:\n");
        for image in &response.images {
            match &image.description {
                Some(description) => {
                    let _ = writeln!(
                        out,
                        "  {} — {}",
                        truncate_url(&image.url, URL_BUDGET),
                        truncate_text(description, SNIPPET_BUDGET)
                    );
                }
                None => {
                    let _ = writeln!(out, "  {}", truncate_url(&image.url, URL_BUDGET));
                }
            }
        }
    }

    out
}

/// Render a normalized research result: status, markdown body, reasoning
/// summaries, citations, usage.
#[must_use]
pub fn render_display(display: &ResearchDisplay) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] status: {}",
        display.provider, display.status
    );

    if display.content.is_empty() {
        let _ = writeln!(out, "\nNo research content available.");
    } else {
        let _ = writeln!(out, "\n{}", display.content);
    }

    if !display.reasoning.is_empty() {
        let _ = write!(out, "\nThinking summaries:\n");
        for summary in &display.reasoning {
            let _ = writeln!(out, "  - {summary}");
        }
    }

    if !display.citations.is_empty() {
        let _ = write!(out, "\nCitations:\n");
        for (index, citation) in display.citations.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {citation}", index + 1);
        }
    }

    if let Some(usage) = &display.usage {
        let _ = writeln!(out, "\n{}", usage_line(usage));
    }

    out
}

/// One-line token-usage summary.
#[must_use]
pub fn usage_line(usage: &TokenUsage) -> String {
    format!(
        "tokens: {} in / {} out / {} total",
        usage.input_tokens, usage.output_tokens, usage.total_tokens
    )
}
