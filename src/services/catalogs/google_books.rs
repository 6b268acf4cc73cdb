/// Google Books API client
///
/// Covers the three volume endpoints the service needs:
/// 1. Associated volumes: /volumes/{id}/associated (unpaginated)
/// 2. Volume details: /volumes/{id}
/// 3. Volume search: /volumes?q=... (paginated via startIndex/maxResults)
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{BookSearchPage, MediaItem, Volume, Volumes},
    services::catalogs::BookCatalog,
};

#[derive(Clone)]
pub struct GoogleBooksCatalog {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl GoogleBooksCatalog {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
        }
    }

    /// Issues a GET request and decodes the JSON body, converting non-success
    /// statuses and malformed payloads into upstream errors
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let mut request = self.http_client.get(url).query(query);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Books API returned status {}: {}",
                status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::Upstream(format!("Failed to parse Books API response: {}", e))
        })
    }

    fn items_of(volumes: Volumes) -> Vec<MediaItem> {
        volumes
            .items
            .unwrap_or_default()
            .into_iter()
            .map(MediaItem::from)
            .collect()
    }
}

#[async_trait::async_trait]
impl BookCatalog for GoogleBooksCatalog {
    async fn associated_volumes(
        &self,
        volume_id: &str,
        country: &str,
    ) -> AppResult<Vec<MediaItem>> {
        let url = format!("{}/volumes/{}/associated", self.api_url, volume_id);
        let volumes: Volumes = self.get_json(&url, &[("country", country)]).await?;
        let items = Self::items_of(volumes);

        tracing::debug!(
            volume_id = %volume_id,
            associated = items.len(),
            "Associated volumes fetched"
        );

        Ok(items)
    }

    async fn volume_details(&self, volume_id: &str) -> AppResult<MediaItem> {
        let url = format!("{}/volumes/{}", self.api_url, volume_id);
        let volume: Volume = self.get_json(&url, &[]).await?;
        Ok(MediaItem::from(volume))
    }

    async fn search_volumes(
        &self,
        query: &str,
        max_results: u32,
        start_index: u64,
        country: &str,
    ) -> AppResult<BookSearchPage> {
        let url = format!("{}/volumes", self.api_url);
        let max_results = max_results.to_string();
        let start_index = start_index.to_string();

        let volumes: Volumes = self
            .get_json(
                &url,
                &[
                    ("q", query),
                    ("maxResults", max_results.as_str()),
                    ("startIndex", start_index.as_str()),
                    ("country", country),
                ],
            )
            .await?;

        let total_items = volumes.total_items;
        let items = Self::items_of(volumes);

        tracing::info!(
            query = %query,
            results = items.len(),
            total = total_items,
            catalog = "google_books",
            "Volume search completed"
        );

        Ok(BookSearchPage { items, total_items })
    }
}
