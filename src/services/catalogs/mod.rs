/// External catalog abstraction
///
/// This module provides a pluggable seam for the two media catalogs the
/// service aggregates (Google Books for volumes, TMDB for movies). The
/// recommendation engine and the search services only depend on these traits,
/// so catalog clients can be swapped or mocked without touching the core.
use crate::{
    error::AppResult,
    models::{BookSearchPage, MediaItem, MovieResultsPage},
};

pub mod google_books;
pub mod tmdb;

/// Region scope applied uniformly to all book catalog calls, for consistent
/// availability and rights filtering
pub const COUNTRY: &str = "US";

/// Client for the book catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookCatalog: Send + Sync {
    /// Fetch the full, unpaginated set of volumes associated with a volume.
    ///
    /// The catalog exposes no server-side paging for this endpoint; callers
    /// slice the result locally.
    async fn associated_volumes(&self, volume_id: &str, country: &str)
        -> AppResult<Vec<MediaItem>>;

    /// Fetch full details of a single volume
    async fn volume_details(&self, volume_id: &str) -> AppResult<MediaItem>;

    /// Run a volume search with native pagination via `start_index`
    async fn search_volumes(
        &self,
        query: &str,
        max_results: u32,
        start_index: u64,
        country: &str,
    ) -> AppResult<BookSearchPage>;
}

/// Client for the movie catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page of recommended movies. The catalog's pages are
    /// 1-indexed.
    async fn recommended_movies(&self, movie_id: i32, page: u32) -> AppResult<MovieResultsPage>;

    /// Fetch full details of a single movie
    async fn movie_details(&self, movie_id: i32) -> AppResult<MediaItem>;

    /// Run a movie search. The catalog's pages are 1-indexed.
    async fn search_movies(&self, query: &str, page: u32) -> AppResult<MovieResultsPage>;
}
