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

/// Handler for movie search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<PagedResult<MediaItem>>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::InvalidInput("query must not be empty".to_string()))?;
    let page = parse_page_number(params.page_number.as_deref())?;

    let results = search::search_movies(state.movies.as_ref(), &query, page).await?;
    Ok(Json(results))
}

/// Handler for movie details
pub async fn details(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetailsParams>,
) -> AppResult<Json<MediaItem>> {
    let movie_id: i32 = params
        .id
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| AppError::InvalidInput("id must be a numeric movie id".to_string()))?;

    let movie = state.movies.movie_details(movie_id).await?;
    Ok(Json(movie))
}
