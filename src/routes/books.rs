use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{parse_page_number, MediaItem, PagedResult},
    routes::AppState,
    services::search,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    query: Option<String>,
    #[serde(rename = "pageNumber")]
    page_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    id: Option<String>,
}

/// Handler for book search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<PagedResult<MediaItem>>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::InvalidInput("query must not be empty".to_string()))?;
    let page = parse_page_number(params.page_number.as_deref())?;

    let results = search::search_books(state.books.as_ref(), &query, page).await?;
    Ok(Json(results))
}

/// Handler for book details
pub async fn details(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetailsParams>,
) -> AppResult<Json<MediaItem>> {
    let volume_id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidInput("id must not be empty".to_string()))?;

    let volume = state.books.volume_details(&volume_id).await?;
    Ok(Json(volume))
}
