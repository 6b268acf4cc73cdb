use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{MediaItem, PagedResult, RecommendationRequest},
    routes::AppState,
};

/// Raw query parameters; validation happens in `RecommendationRequest::parse`
/// so missing and malformed values surface as a client error, not a routing
/// rejection
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    #[serde(rename = "mediaType")]
    media_type: Option<String>,
    #[serde(rename = "mediaId")]
    media_id: Option<String>,
    #[serde(rename = "pageNumber")]
    page_number: Option<String>,
}

/// Handler for the recommendations endpoint
pub async fn related(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<PagedResult<MediaItem>>> {
    let request = RecommendationRequest::parse(
        params.media_type.as_deref(),
        params.media_id.as_deref(),
        params.page_number.as_deref(),
    )?;

    tracing::info!(
        request_id = %request_id,
        media_type = %request.media_type,
        media_id = %request.media_id,
        page = request.page,
        "Resolving recommendations"
    );

    let result = state.engine.resolve(&request).await?;

    tracing::info!(
        request_id = %request_id,
        results = result.items.len(),
        total = result.total_items,
        "Recommendations resolved"
    );

    Ok(Json(result))
}
