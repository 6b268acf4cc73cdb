use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{
        catalogs::{BookCatalog, MovieCatalog},
        recommendations::RecommendationEngine,
    },
};

pub mod books;
pub mod movies;
pub mod recommendations;

/// Shared application state: the engine plus the injected catalog clients
pub struct AppState {
    pub engine: RecommendationEngine,
    pub books: Arc<dyn BookCatalog>,
    pub movies: Arc<dyn MovieCatalog>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookCatalog>, movies: Arc<dyn MovieCatalog>) -> Self {
        Self {
            engine: RecommendationEngine::new(books.clone(), movies.clone()),
            books,
            movies,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/recommendations", get(recommendations::related))
        .route("/books/search", get(books::search))
        .route("/books/details", get(books::details))
        .route("/movies/search", get(movies::search))
        .route("/movies/details", get(movies::details))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
