use clap::Subcommand;

/// Saved-item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemsCommands {
    /// List saved items.
    List {
        /// Number of items to skip (pagination offset).
        #[arg(long, default_value_t = 0)]
        skip: u32,
        /// Max items to return.
        #[arg(long)]
        limit: Option<u32>,
        /// Filter by content type: search, extract, crawl, map, perplexity, gemini.
        #[arg(long, value_name = "TYPE")]
        r#type: Option<String>,
    },
}
