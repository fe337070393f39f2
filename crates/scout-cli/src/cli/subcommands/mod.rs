mod items;
mod perplexity;
mod research;

pub use items::ItemsCommands;
pub use perplexity::PerplexityCommands;
pub use research::ResearchCommands;
