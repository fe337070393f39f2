use scout_client::ApiClient;
use scout_core::job::JobHandle;
use scout_workflow::cancel;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

pub async fn run(
    interaction_id: &str,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let handle = JobHandle::new(interaction_id.to_string());
    cancel(client, &handle).await?;

    if flags.format == OutputFormat::Table {
        println!(
            "Cancellation requested for {interaction_id}; an active poll loop \
             stops once it observes the cancelled status."
        );
        return Ok(());
    }
    output(
        &serde_json::json!({ "interaction_id": interaction_id, "cancel_requested": true }),
        flags.format,
    )
}
