//! Persisting research output through the Items resource.

use std::sync::Mutex;

use scout_client::{ApiClient, ApiError};
use scout_core::item::{Item, ItemCreate};
use scout_core::mappers::{map_gemini_result, map_perplexity_result};
use scout_core::research::ResearchResult;

use crate::cache::{ITEMS_ENDPOINT, ResponseCache};
use crate::error::WorkflowError;

/// The item-creation operation the save workflow drives.
pub trait ItemsStore {
    fn create(&self, item: &ItemCreate) -> impl Future<Output = Result<Item, ApiError>>;
}

impl ItemsStore for ApiClient {
    async fn create(&self, item: &ItemCreate) -> Result<Item, ApiError> {
        self.create_item(item).await
    }
}

/// Map a research result to an item and persist it.
///
/// On success the items listing cache is invalidated so the next listing
/// refetches. No retry, no partial state: either the item exists afterwards
/// or nothing changed.
///
/// # Errors
///
/// Returns [`WorkflowError::Persist`] immediately on failure.
pub async fn save_research<S: ItemsStore>(
    store: &S,
    result: &ResearchResult,
    query: &str,
    cache: &Mutex<ResponseCache>,
) -> Result<Item, WorkflowError> {
    let item = match result {
        ResearchResult::Gemini(gemini) => map_gemini_result(gemini, query),
        ResearchResult::Perplexity(perplexity) => map_perplexity_result(perplexity, query),
    };

    let created = store
        .create(&item)
        .await
        .map_err(WorkflowError::Persist)?;

    let dropped = cache
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .invalidate(ITEMS_ENDPOINT);
    tracing::debug!(item_id = %created.id, dropped, "saved research item; items cache invalidated");

    Ok(created)
}
