use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{ItemsCommands, PerplexityCommands, ResearchCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Asynchronous deep-research jobs (submit, poll, cancel).
    Research {
        #[command(subcommand)]
        action: ResearchCommands,
    },
    /// Blocking deep research with citations.
    Perplexity {
        #[command(subcommand)]
        action: PerplexityCommands,
    },
    /// Web search.
    Search(SearchArgs),
    /// Saved research items.
    Items {
        #[command(subcommand)]
        action: ItemsCommands,
    },
}

/// Search depth for web searches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum DepthArg {
    #[default]
    Basic,
    Advanced,
}

/// Topic category for web searches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum TopicArg {
    #[default]
    General,
    News,
}

/// Arguments for `sct search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search query.
    pub query: String,

    /// Search depth (advanced is slower but more comprehensive).
    #[arg(long, value_enum, default_value_t = DepthArg::Basic)]
    pub depth: DepthArg,

    /// Topic category.
    #[arg(long, value_enum, default_value_t = TopicArg::General)]
    pub topic: TopicArg,

    /// Maximum results (1-20).
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Include an AI-generated answer summary.
    #[arg(long)]
    pub answer: bool,

    /// Include image results.
    #[arg(long)]
    pub images: bool,

    /// Include descriptions for image results (implies --images).
    #[arg(long)]
    pub image_descriptions: bool,

    /// Include raw page content for each result.
    #[arg(long)]
    pub raw_content: bool,

    /// Restrict the search to these domains (repeatable).
    #[arg(long = "include-domain")]
    pub include_domains: Vec<String>,

    /// Exclude these domains (repeatable).
    #[arg(long = "exclude-domain")]
    pub exclude_domains: Vec<String>,

    /// Save the Nth result (1-based) to Items after searching.
    #[arg(long, value_name = "N")]
    pub save: Option<usize>,
}
