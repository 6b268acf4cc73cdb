/// TMDB API client
///
/// Covers the movie endpoints the service needs:
/// 1. Recommendations: /movie/{id}/recommendations (1-indexed pages)
/// 2. Details: /movie/{id}
/// 3. Search: /search/movie (1-indexed pages)
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{MediaItem, MovieResultsPage, TmdbMovieDetails, TmdbMoviePage},
    services::catalogs::MovieCatalog,
};

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_url: String,
    api_key: String,
}

impl TmdbCatalog {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let response = self
            .http_client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse TMDB response: {}", e)))
    }

    fn convert_page(page: TmdbMoviePage) -> MovieResultsPage {
        MovieResultsPage {
            items: page.results.into_iter().map(MediaItem::from).collect(),
            total_items: page.total_results,
            total_pages: page.total_pages,
        }
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn recommended_movies(&self, movie_id: i32, page: u32) -> AppResult<MovieResultsPage> {
        let url = format!("{}/movie/{}/recommendations", self.api_url, movie_id);
        let page_param = page.to_string();
        let results: TmdbMoviePage = self.get_json(&url, &[("page", page_param.as_str())]).await?;

        tracing::debug!(
            movie_id = movie_id,
            page = page,
            results = results.results.len(),
            "Movie recommendations fetched"
        );

        Ok(Self::convert_page(results))
    }

    async fn movie_details(&self, movie_id: i32) -> AppResult<MediaItem> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);
        let details: TmdbMovieDetails = self.get_json(&url, &[]).await?;
        Ok(MediaItem::from(details))
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<MovieResultsPage> {
        let url = format!("{}/search/movie", self.api_url);
        let page_param = page.to_string();
        let results: TmdbMoviePage = self
            .get_json(&url, &[("query", query), ("page", page_param.as_str())])
            .await?;

        tracing::info!(
            query = %query,
            results = results.results.len(),
            total = results.total_results,
            catalog = "tmdb",
            "Movie search completed"
        );

        Ok(Self::convert_page(results))
    }
}
