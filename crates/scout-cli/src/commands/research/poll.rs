use std::pin::pin;
use std::time::Duration;

use scout_client::ApiClient;
use scout_config::ScoutConfig;
use scout_core::job::JobHandle;
use scout_workflow::{PollSession, poll_until_terminal};

use crate::cli::GlobalFlags;
use crate::commands::research::shared::{emit_result, poll_config, save_result};
use crate::progress::Progress;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    interaction_id: &str,
    last_event_id: Option<String>,
    interval_ms: Option<u64>,
    save: bool,
    query: Option<&str>,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let poll_config = poll_config(config, interval_ms);
    let session = PollSession::new(Duration::from_secs(config.research.cache_ttl_secs));
    let handle = JobHandle {
        interaction_id: interaction_id.to_string(),
        last_event_id,
    };

    let progress = Progress::spinner("polling research job");
    let mut watcher = session.watch_snapshots();

    let mut loop_fut = pin!(poll_until_terminal(client, handle, &poll_config, &session));
    let result = loop {
        tokio::select! {
            outcome = &mut loop_fut => break outcome,
            changed = watcher.changed() => {
                if changed.is_ok() {
                    if let Some(snapshot) = watcher.borrow_and_update().as_ref() {
                        progress.set_message(&format!(
                            "status: {} ({} output segment(s))",
                            snapshot.status,
                            snapshot.outputs.len()
                        ));
                    }
                }
            }
        }
    };

    match result {
        Ok(result) => {
            progress.finish_clear();
            emit_result(&result, flags)?;
            if save {
                // clap enforces --query alongside --save.
                if let Some(query) = query {
                    save_result(client, &result, query, config, flags).await?;
                }
            }
            Ok(())
        }
        Err(error) => {
            progress.finish_err("polling failed");
            Err(error.into())
        }
    }
}
