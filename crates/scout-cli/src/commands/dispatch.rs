use scout_client::ApiClient;
use scout_config::ScoutConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Research { action } => {
            commands::research::handle(&action, client, config, flags).await
        }
        Commands::Perplexity { action } => {
            commands::perplexity::handle(&action, client, config, flags).await
        }
        Commands::Search(args) => commands::search::handle(&args, client, config, flags).await,
        Commands::Items { action } => commands::items::handle(&action, client, config, flags).await,
    }
}
