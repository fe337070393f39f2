//! The savable-item shape accepted by the Items resource.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload for creating an item.
///
/// Ownership transfers to the persistence layer once submitted; the item is
/// either created whole or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItemCreate {
    /// Display title, at most 255 characters.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Content-type tag identifying the producing operation.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Provider-specific auxiliary fields kept for later inspection.
    #[serde(default)]
    pub item_metadata: Option<Map<String, Value>>,
}

/// A persisted item as returned by the Items resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub item_metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of an item listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItemsPage {
    pub data: Vec<Item>,
    pub count: u64,
}
