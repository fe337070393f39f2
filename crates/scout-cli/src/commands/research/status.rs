use scout_client::ApiClient;
use scout_config::ScoutConfig;
use scout_core::job::JobHandle;
use scout_workflow::{PollStep, poll_once};

use crate::cli::GlobalFlags;
use crate::commands::research::shared::{emit_result, poll_config};

pub async fn run(
    interaction_id: &str,
    last_event_id: Option<String>,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let handle = JobHandle {
        interaction_id: interaction_id.to_string(),
        last_event_id,
    };

    let step = poll_once(client, &handle, &poll_config(config, None)).await?;
    let (PollStep::Pending(result) | PollStep::Terminal(result)) = step;
    emit_result(&result, flags)
}
