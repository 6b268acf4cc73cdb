//! Catalog search services.
//!
//! Thin delegation over the catalog clients that normalizes both search
//! surfaces into the same `PagedResult` shape the recommendations use.

use crate::{
    error::AppResult,
    models::{MediaItem, PagedResult, RESULTS_PER_PAGE},
    services::catalogs::{BookCatalog, MovieCatalog, COUNTRY},
    services::recommendations::PageCounting,
};

/// Searches the book catalog, deriving the page window via `startIndex`
pub async fn search_books(
    catalog: &dyn BookCatalog,
    query: &str,
    page: u32,
) -> AppResult<PagedResult<MediaItem>> {
    let start_index = page as u64 * RESULTS_PER_PAGE as u64;
    let found = catalog
        .search_volumes(query, RESULTS_PER_PAGE as u32, start_index, COUNTRY)
        .await?;

    Ok(PagedResult {
        total_pages: PageCounting::default().page_count(found.total_items, RESULTS_PER_PAGE),
        total_items: found.total_items,
        items: found.items,
        page,
    })
}

/// Searches the movie catalog, translating to its 1-indexed pages
pub async fn search_movies(
    catalog: &dyn MovieCatalog,
    query: &str,
    page: u32,
) -> AppResult<PagedResult<MediaItem>> {
    let results = catalog.search_movies(query, page.saturating_add(1)).await?;

    Ok(PagedResult {
        items: results.items,
        total_items: results.total_items,
        total_pages: results.total_pages.max(1),
        page,
    })
}
