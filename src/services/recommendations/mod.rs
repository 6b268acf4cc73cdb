//! Related-media recommendation resolution.
//!
//! The engine validates a request, dispatches to the resolver matching the
//! media type and returns one uniform `PagedResult` regardless of how the
//! underlying catalog paginates. Catalog clients are injected, so the engine
//! holds no per-request state and is freely shared across requests.

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MediaItem, MediaType, PagedResult, RecommendationRequest},
    services::catalogs::{BookCatalog, MovieCatalog},
};

mod book;
mod movie;
pub mod paging;
pub mod query;

pub use paging::PageCounting;

#[derive(Clone)]
pub struct RecommendationEngine {
    books: Arc<dyn BookCatalog>,
    movies: Arc<dyn MovieCatalog>,
    page_counting: PageCounting,
}

impl RecommendationEngine {
    pub fn new(books: Arc<dyn BookCatalog>, movies: Arc<dyn MovieCatalog>) -> Self {
        Self {
            books,
            movies,
            page_counting: PageCounting::default(),
        }
    }

    /// Overrides the page-count formula used for derived pagination
    pub fn with_page_counting(mut self, page_counting: PageCounting) -> Self {
        self.page_counting = page_counting;
        self
    }

    /// Resolves related items for a validated request
    pub async fn resolve(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<PagedResult<MediaItem>> {
        match request.media_type {
            MediaType::Book => {
                book::resolve(
                    self.books.as_ref(),
                    self.page_counting,
                    &request.media_id,
                    request.page,
                )
                .await
            }
            MediaType::Movie => {
                movie::resolve(self.movies.as_ref(), &request.media_id, request.page).await
            }
        }
    }
}
