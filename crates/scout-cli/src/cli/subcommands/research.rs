use clap::Subcommand;

/// Deep-research job commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResearchCommands {
    /// Submit a new deep-research job and print its handle.
    Start {
        /// Research query (up to 50,000 characters).
        query: String,
        /// Ask the provider for internal-reasoning summaries.
        #[arg(long)]
        thinking: bool,
        /// Comma-separated file-search store names to ground the research in.
        #[arg(long)]
        store_names: Option<String>,
        /// Previous interaction ID to continue from.
        #[arg(long)]
        continue_from: Option<String>,
    },
    /// Poll a job until it reaches a terminal status.
    Poll {
        /// Job interaction ID from `sct research start`.
        interaction_id: String,
        /// Resume incremental polling from this event cursor.
        #[arg(long)]
        last_event_id: Option<String>,
        /// Override the poll interval in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Save the final result to Items (requires --query).
        #[arg(long, requires = "query")]
        save: bool,
        /// Original research query, used for the saved item's title.
        #[arg(long)]
        query: Option<String>,
    },
    /// Fetch a job's current status once, without looping.
    Status {
        interaction_id: String,
        #[arg(long)]
        last_event_id: Option<String>,
    },
    /// Request cancellation of a running job.
    ///
    /// An active poll loop stops on its own once it observes the cancelled
    /// status.
    Cancel { interaction_id: String },
    /// Run deep research synchronously, holding the connection until done.
    Sync {
        query: String,
        #[arg(long)]
        thinking: bool,
        #[arg(long)]
        store_names: Option<String>,
        #[arg(long)]
        continue_from: Option<String>,
        /// Save the result to Items.
        #[arg(long)]
        save: bool,
    },
}
