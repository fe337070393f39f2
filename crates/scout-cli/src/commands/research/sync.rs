use scout_client::ApiClient;
use scout_config::ScoutConfig;

use crate::cli::GlobalFlags;
use crate::commands::research::shared::{build_request, emit_result, save_result};
use crate::progress::Progress;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    query: &str,
    thinking: bool,
    store_names: Option<&str>,
    continue_from: Option<&str>,
    save: bool,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = build_request(query, thinking, store_names, continue_from);

    let progress = Progress::spinner("running deep research (blocking)");
    let result = client.deep_research_sync(&request).await;
    match result {
        Ok(result) => {
            progress.finish_clear();
            emit_result(&result, flags)?;
            if save {
                save_result(client, &result, query, config, flags).await?;
            }
            Ok(())
        }
        Err(error) => {
            progress.finish_err("deep research failed");
            Err(error.into())
        }
    }
}
