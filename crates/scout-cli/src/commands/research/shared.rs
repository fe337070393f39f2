use std::sync::Mutex;
use std::time::Duration;

use scout_client::{ApiClient, GeminiRequest, gemini::parse_store_names};
use scout_config::ScoutConfig;
use scout_core::research::{GeminiResult, ResearchResult};
use scout_workflow::{PollConfig, ResponseCache, save_research};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::render;

/// Assemble a deep-research request from command-line parts.
pub fn build_request(
    query: &str,
    thinking: bool,
    store_names: Option<&str>,
    continue_from: Option<&str>,
) -> GeminiRequest {
    GeminiRequest {
        query: query.to_string(),
        enable_thinking_summaries: thinking,
        file_search_store_names: store_names.and_then(parse_store_names),
        previous_interaction_id: continue_from.map(str::to_string),
    }
}

/// Poll configuration from loaded config, with an optional interval override.
pub fn poll_config(config: &ScoutConfig, interval_override_ms: Option<u64>) -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(
            interval_override_ms.unwrap_or(config.research.poll_interval_ms),
        ),
        max_retries: config.research.poll_retries,
        retry_backoff: Duration::from_millis(config.research.retry_backoff_ms),
    }
}

/// Print a job result: human rendering for tables, structured otherwise.
pub fn emit_result(result: &GeminiResult, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        let display = ResearchResult::Gemini(result.clone()).normalize();
        println!("{}", render::render_display(&display));
        return Ok(());
    }
    output(result, flags.format)
}

/// Persist a finished job result to Items and report the created id.
pub async fn save_result(
    client: &ApiClient,
    result: &GeminiResult,
    query: &str,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let cache = Mutex::new(ResponseCache::new(Duration::from_secs(
        config.research.cache_ttl_secs,
    )));
    let item = save_research(
        client,
        &ResearchResult::Gemini(result.clone()),
        query,
        &cache,
    )
    .await?;

    if flags.format == OutputFormat::Table {
        println!("Saved to items: {}", item.id);
        return Ok(());
    }
    output(&item, flags.format)
}
