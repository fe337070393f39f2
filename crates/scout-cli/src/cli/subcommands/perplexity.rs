use clap::Subcommand;

/// Blocking deep-research commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PerplexityCommands {
    /// Run a deep-research query and print the cited answer.
    Ask {
        /// Research query.
        query: String,
        /// Model override.
        #[arg(long)]
        model: Option<String>,
        /// Reasoning effort: low, medium, high.
        #[arg(long)]
        reasoning_effort: Option<String>,
        /// Save the result to Items.
        #[arg(long)]
        save: bool,
    },
}
