mod cancel;
mod poll;
mod shared;
mod start;
mod status;
mod sync;

use scout_client::ApiClient;
use scout_config::ScoutConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResearchCommands;

/// Handle `sct research`.
pub async fn handle(
    action: &ResearchCommands,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResearchCommands::Start {
            query,
            thinking,
            store_names,
            continue_from,
        } => {
            start::run(
                query,
                *thinking,
                store_names.as_deref(),
                continue_from.as_deref(),
                client,
                flags,
            )
            .await
        }
        ResearchCommands::Poll {
            interaction_id,
            last_event_id,
            interval_ms,
            save,
            query,
        } => {
            poll::run(
                interaction_id,
                last_event_id.clone(),
                *interval_ms,
                *save,
                query.as_deref(),
                client,
                config,
                flags,
            )
            .await
        }
        ResearchCommands::Status {
            interaction_id,
            last_event_id,
        } => {
            status::run(
                interaction_id,
                last_event_id.clone(),
                client,
                config,
                flags,
            )
            .await
        }
        ResearchCommands::Cancel { interaction_id } => {
            cancel::run(interaction_id, client, flags).await
        }
        ResearchCommands::Sync {
            query,
            thinking,
            store_names,
            continue_from,
            save,
        } => {
            sync::run(
                query,
                *thinking,
                store_names.as_deref(),
                continue_from.as_deref(),
                *save,
                client,
                config,
                flags,
            )
            .await
        }
    }
}
