use std::time::Duration;

use clap::Parser;

use scout_client::ApiClient;
use scout_config::ScoutConfig;

mod cli;
mod commands;
mod output;
mod progress;
mod render;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sct error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = ScoutConfig::load_with_dotenv()?;
    let client = build_client(&config)?;

    commands::dispatch::dispatch(cli.command, &client, &config, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SCOUT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn build_client(config: &ScoutConfig) -> anyhow::Result<ApiClient> {
    if !config.api.is_configured() {
        anyhow::bail!(
            "API base URL is not configured. Set SCOUT_API__BASE_URL or add \
             [api] base_url to .scout/config.toml."
        );
    }

    let token = if config.api.token.is_empty() {
        None
    } else {
        Some(config.api.token.clone())
    };

    Ok(ApiClient::new(
        &config.api.base_url,
        token,
        Duration::from_secs(config.api.timeout_secs),
    ))
}
