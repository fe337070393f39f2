use std::str::FromStr;

use serde::Serialize;

use scout_client::ApiClient;
use scout_config::ScoutConfig;
use scout_core::enums::ContentKind;
use scout_core::item::Item;

use crate::cli::subcommands::ItemsCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::render;

/// Character budget for source URLs in the listing table.
const URL_CELL_BUDGET: usize = 40;
/// Character budget for titles in the listing table.
const TITLE_CELL_BUDGET: usize = 60;

/// Handle `sct items`.
pub async fn handle(
    action: &ItemsCommands,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ItemsCommands::List {
            skip,
            limit,
            r#type,
        } => list(*skip, *limit, r#type.as_deref(), client, config, flags).await,
    }
}

/// Compact row shape for the listing table.
#[derive(Debug, Serialize)]
struct ItemRow {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    title: String,
    source_url: String,
    created_at: String,
}

impl ItemRow {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            kind: item.content_type.clone().unwrap_or_else(|| "-".to_string()),
            title: render::truncate_text(&item.title, TITLE_CELL_BUDGET),
            source_url: item
                .source_url
                .as_deref()
                .map_or_else(|| "-".to_string(), |url| render::truncate_url(url, URL_CELL_BUDGET)),
            created_at: item
                .created_at
                .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

async fn list(
    skip: u32,
    limit: Option<u32>,
    content_type: Option<&str>,
    client: &ApiClient,
    config: &ScoutConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = content_type.map(ContentKind::from_str).transpose()?;
    let limit = limit.or(flags.limit).unwrap_or(config.general.default_limit);

    let page = client
        .read_items(skip, limit, kind.map(ContentKind::as_str))
        .await?;

    if flags.format != OutputFormat::Table {
        return output(&page, flags.format);
    }

    if page.data.is_empty() {
        println!("{}", render::items_empty_state(kind.map(ContentKind::as_str)));
        return Ok(());
    }

    let rows: Vec<ItemRow> = page.data.iter().map(ItemRow::from_item).collect();
    output(&rows, flags.format)
}
