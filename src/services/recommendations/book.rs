//! Book recommendation resolution.
//!
//! Two strategies are tried in order. The primary one fetches the catalog's
//! associated volumes, an unpaginated set that gets sliced locally. When it
//! fails, a fallback searches the catalog with a query derived from the
//! source volume's metadata; only the fallback's own failures are fatal.

use crate::{
    error::AppResult,
    models::{MediaItem, PagedResult, RESULTS_PER_PAGE},
    services::catalogs::{BookCatalog, COUNTRY},
    services::recommendations::{
        paging::{self, PageCounting},
        query,
    },
};

pub(super) async fn resolve(
    catalog: &dyn BookCatalog,
    counting: PageCounting,
    book_id: &str,
    page: u32,
) -> AppResult<PagedResult<MediaItem>> {
    match associated_page(catalog, counting, book_id, page).await {
        Ok(result) => Ok(result),
        Err(err) => {
            // Soft failure: the associated-volumes endpoint is unreliable,
            // recover by searching instead of surfacing the error.
            tracing::warn!(
                book_id = %book_id,
                error = %err,
                "Associated volumes lookup failed, falling back to derived search"
            );
            search_fallback(catalog, counting, book_id, page).await
        }
    }
}

/// Primary strategy: slice the unpaginated associated-volumes set
async fn associated_page(
    catalog: &dyn BookCatalog,
    counting: PageCounting,
    book_id: &str,
    page: u32,
) -> AppResult<PagedResult<MediaItem>> {
    let volumes = catalog.associated_volumes(book_id, COUNTRY).await?;

    let total_items = volumes.len() as u64;
    let items = paging::slice_page(volumes, page, RESULTS_PER_PAGE);

    Ok(PagedResult {
        items,
        total_items,
        total_pages: counting.page_count(total_items, RESULTS_PER_PAGE),
        page,
    })
}

/// Fallback strategy: search the catalog with a query derived from the
/// source volume, excluding the source volume itself from the results
async fn search_fallback(
    catalog: &dyn BookCatalog,
    counting: PageCounting,
    book_id: &str,
    page: u32,
) -> AppResult<PagedResult<MediaItem>> {
    let source = catalog.volume_details(book_id).await?;
    let search_query = query::fallback_query(&source);
    let start_index = page as u64 * RESULTS_PER_PAGE as u64;

    let found = catalog
        .search_volumes(&search_query, RESULTS_PER_PAGE as u32, start_index, COUNTRY)
        .await?;

    // The source volume commonly matches its own category/title search
    let items: Vec<MediaItem> = found
        .items
        .into_iter()
        .filter(|item| item.id != source.id)
        .collect();

    tracing::debug!(
        book_id = %book_id,
        query = %search_query,
        results = items.len(),
        "Fallback search completed"
    );

    Ok(PagedResult {
        items,
        total_items: found.total_items,
        total_pages: counting.page_count(found.total_items, RESULTS_PER_PAGE),
        page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::BookSearchPage,
        services::catalogs::MockBookCatalog,
    };

    fn book(id: &str) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            title: Some(format!("Title {}", id)),
            categories: Vec::new(),
            authors: Vec::new(),
            description: None,
            thumbnail: None,
            release_date: None,
        }
    }

    fn book_with(id: &str, title: Option<&str>, categories: &[&str]) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            title: title.map(str::to_string),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            authors: Vec::new(),
            description: None,
            thumbnail: None,
            release_date: None,
        }
    }

    fn books(count: usize) -> Vec<MediaItem> {
        (0..count).map(|i| book(&format!("vol-{}", i))).collect()
    }

    #[tokio::test]
    async fn primary_path_slices_the_associated_set() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .withf(|id, country| id == "abc" && country == "US")
            .times(1)
            .returning(|_, _| Ok(books(45)));

        let result = resolve(&catalog, PageCounting::default(), "abc", 1)
            .await
            .unwrap();

        assert_eq!(result.page, 1);
        assert_eq!(result.total_items, 45);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.items.len(), 20);
        assert_eq!(result.items[0].id, "vol-20");
    }

    #[tokio::test]
    async fn primary_path_past_the_end_is_empty_not_an_error() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .times(1)
            .returning(|_, _| Ok(books(20)));

        let result = resolve(&catalog, PageCounting::default(), "abc", 1)
            .await
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total_items, 20);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn primary_path_with_no_associated_volumes_reports_one_page() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let result = resolve(&catalog, PageCounting::default(), "abc", 0)
            .await
            .unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn fallback_searches_by_category_and_filters_the_source() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .times(1)
            .returning(|_, _| Err(AppError::Upstream("associated endpoint down".to_string())));
        catalog
            .expect_volume_details()
            .withf(|id| id == "abc")
            .times(1)
            .returning(|_| Ok(book_with("abc", Some("The Hobbit"), &["Fantasy"])));
        catalog
            .expect_search_volumes()
            .withf(|query, max_results, start_index, country| {
                query == "subject:Fantasy"
                    && *max_results == 20
                    && *start_index == 40
                    && country == "US"
            })
            .times(1)
            .returning(|_, _, _, _| {
                Ok(BookSearchPage {
                    items: vec![book("abc"), book("def"), book("ghi")],
                    total_items: 93,
                })
            });

        let result = resolve(&catalog, PageCounting::default(), "abc", 2)
            .await
            .unwrap();

        assert_eq!(result.page, 2);
        assert_eq!(result.total_items, 93);
        assert_eq!(result.total_pages, 4);
        let ids: Vec<&str> = result.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["def", "ghi"]);
    }

    #[tokio::test]
    async fn fallback_derives_query_from_title_without_categories() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .times(1)
            .returning(|_, _| Err(AppError::Upstream("down".to_string())));
        catalog
            .expect_volume_details()
            .times(1)
            .returning(|_| Ok(book_with("abc", Some("There and Back Again"), &[])));
        catalog
            .expect_search_volumes()
            .withf(|query, _, start_index, _| query == "There and Back" && *start_index == 0)
            .times(1)
            .returning(|_, _, _, _| {
                Ok(BookSearchPage {
                    items: vec![book("def")],
                    total_items: 1,
                })
            });

        let result = resolve(&catalog, PageCounting::default(), "abc", 0)
            .await
            .unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn failed_detail_fetch_fails_the_whole_request() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .times(1)
            .returning(|_, _| Err(AppError::Upstream("down".to_string())));
        catalog
            .expect_volume_details()
            .times(1)
            .returning(|_| Err(AppError::Upstream("no such volume".to_string())));
        catalog.expect_search_volumes().times(0);

        let err = resolve(&catalog, PageCounting::default(), "abc", 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn failed_fallback_search_fails_the_whole_request() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .times(1)
            .returning(|_, _| Err(AppError::Upstream("down".to_string())));
        catalog
            .expect_volume_details()
            .times(1)
            .returning(|_| Ok(book_with("abc", None, &["Fantasy"])));
        catalog
            .expect_search_volumes()
            .times(1)
            .returning(|_, _, _, _| Err(AppError::Upstream("search down".to_string())));

        let err = resolve(&catalog, PageCounting::default(), "abc", 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn rounding_up_counting_is_honored_when_configured() {
        let mut catalog = MockBookCatalog::new();
        catalog
            .expect_associated_volumes()
            .times(1)
            .returning(|_, _| Ok(books(25)));

        let result = resolve(&catalog, PageCounting::RoundingUp, "abc", 0)
            .await
            .unwrap();

        assert_eq!(result.total_items, 25);
        assert_eq!(result.total_pages, 2);
    }
}
