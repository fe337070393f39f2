//! Items persistence resource client.

use scout_core::item::{Item, ItemCreate, ItemsPage};

use crate::{ApiClient, error::ApiError, http::check_response, http::read_json};

impl ApiClient {
    /// Persist a savable item.
    ///
    /// No retry: the item is either created or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn create_item(&self, item: &ItemCreate) -> Result<Item, ApiError> {
        let url = self.url("/items");
        let resp = check_response(
            self.request(reqwest::Method::POST, &url)
                .json(item)
                .send()
                .await?,
        )
        .await?;
        read_json(resp).await
    }

    /// List persisted items, optionally filtered by content-type tag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn read_items(
        &self,
        skip: u32,
        limit: u32,
        content_type: Option<&str>,
    ) -> Result<ItemsPage, ApiError> {
        let mut url = self.url(&format!("/items?skip={skip}&limit={limit}"));
        if let Some(kind) = content_type {
            url.push_str(&format!("&content_type={}", urlencoding::encode(kind)));
        }

        let resp = check_response(self.request(reqwest::Method::GET, &url).send().await?).await?;
        read_json(resp).await
    }
}
