//! Movie recommendation resolution.
//!
//! The movie catalog's recommendation endpoint paginates natively, so this
//! resolver only validates the id and translates the public 0-indexed page
//! to the catalog's 1-indexed one.

use crate::{
    error::{AppError, AppResult},
    models::{MediaItem, PagedResult},
    services::catalogs::MovieCatalog,
};

pub(super) async fn resolve(
    catalog: &dyn MovieCatalog,
    movie_id: &str,
    page: u32,
) -> AppResult<PagedResult<MediaItem>> {
    let movie_id: i32 = movie_id.parse().map_err(|_| {
        AppError::InvalidInput(format!("movie id must be numeric, got {:?}", movie_id))
    })?;

    // Catalog pages are 1-indexed; saturate so an extreme public page stays
    // a valid request instead of overflowing
    let results = catalog
        .recommended_movies(movie_id, page.saturating_add(1))
        .await?;

    Ok(PagedResult {
        items: results.items,
        total_items: results.total_items,
        total_pages: results.total_pages.max(1),
        page,
    })
}
