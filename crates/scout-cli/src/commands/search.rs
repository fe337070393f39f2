use anyhow::Context;

use scout_client::{ApiClient, SearchDepth, SearchRequest, SearchTopic};
use scout_config::ScoutConfig;
use scout_core::mappers::map_search_result;

use crate::cli::root_commands::{DepthArg, SearchArgs, TopicArg};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;
use crate::render;

/// Handle `sct search`.
pub async fn handle(
    args: &SearchArgs,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = build_request(args, config, flags);

    let progress = Progress::spinner("searching");
    let response = match client.search(&request).await {
        Ok(response) => {
            progress.finish_clear();
            response
        }
        Err(error) => {
            progress.finish_err("search failed");
            return Err(error.into());
        }
    };

    if flags.format == OutputFormat::Table {
        println!("{}", render::render_search_response(&response));
    } else {
        output(&response, flags.format)?;
    }

    if let Some(position) = args.save {
        let result = position
            .checked_sub(1)
            .and_then(|index| response.results.get(index))
            .with_context(|| {
                format!(
                    "cannot save result {position}: the search returned {} result(s)",
                    response.results.len()
                )
            })?;

        let item = client
            .create_item(&map_search_result(result, &args.query))
            .await?;
        if flags.format == OutputFormat::Table {
            println!("Saved to items: {}", item.id);
        } else {
            output(&item, flags.format)?;
        }
    }

    Ok(())
}

fn build_request(args: &SearchArgs, config: &ScoutConfig, flags: &GlobalFlags) -> SearchRequest {
    SearchRequest {
        query: args.query.clone(),
        search_depth: match args.depth {
            DepthArg::Basic => SearchDepth::Basic,
            DepthArg::Advanced => SearchDepth::Advanced,
        },
        topic: match args.topic {
            TopicArg::General => SearchTopic::General,
            TopicArg::News => SearchTopic::News,
        },
        max_results: args
            .max_results
            .or(flags.limit)
            .unwrap_or(config.general.default_max_results),
        include_answer: args.answer,
        include_images: args.images || args.image_descriptions,
        include_image_descriptions: args.image_descriptions,
        include_raw_content: args.raw_content,
        include_domains: args.include_domains.clone(),
        exclude_domains: args.exclude_domains.clone(),
    }
}
