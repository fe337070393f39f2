use scout_client::ApiClient;
use scout_workflow::submit;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::research::shared::build_request;
use crate::output::output;

pub async fn run(
    query: &str,
    thinking: bool,
    store_names: Option<&str>,
    continue_from: Option<&str>,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = build_request(query, thinking, store_names, continue_from);
    let handle = submit(client, &request).await?;

    if flags.format == OutputFormat::Table && !flags.quiet {
        println!("Job submitted: {}", handle.interaction_id);
        println!("Poll with: sct research poll {}", handle.interaction_id);
        return Ok(());
    }
    output(&handle, flags.format)
}
