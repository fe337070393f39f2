use std::sync::Mutex;
use std::time::Duration;

use scout_client::{ApiClient, PerplexityRequest};
use scout_config::ScoutConfig;
use scout_core::research::ResearchResult;
use scout_workflow::{ResponseCache, save_research};

use crate::cli::subcommands::PerplexityCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;
use crate::render;

/// Handle `sct perplexity`.
pub async fn handle(
    action: &PerplexityCommands,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PerplexityCommands::Ask {
            query,
            model,
            reasoning_effort,
            save,
        } => {
            ask(
                query,
                model.clone(),
                reasoning_effort.clone(),
                *save,
                client,
                config,
                flags,
            )
            .await
        }
    }
}

async fn ask(
    query: &str,
    model: Option<String>,
    reasoning_effort: Option<String>,
    save: bool,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = PerplexityRequest {
        query: query.to_string(),
        model,
        reasoning_effort,
    };

    let progress = Progress::spinner("running deep research");
    let result = match client.perplexity_deep_research(&request).await {
        Ok(result) => {
            progress.finish_clear();
            result
        }
        Err(error) => {
            progress.finish_err("deep research failed");
            return Err(error.into());
        }
    };

    let tagged = ResearchResult::Perplexity(result);
    if flags.format == OutputFormat::Table {
        println!("{}", render::render_display(&tagged.normalize()));
    } else {
        output(&tagged, flags.format)?;
    }

    if save {
        let cache = Mutex::new(ResponseCache::new(Duration::from_secs(
            config.research.cache_ttl_secs,
        )));
        let item = save_research(client, &tagged, query, &cache).await?;
        if flags.format == OutputFormat::Table {
            println!("Saved to items: {}", item.id);
        } else {
            output(&item, flags.format)?;
        }
    }

    Ok(())
}
