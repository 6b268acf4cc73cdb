use std::sync::Arc;

use kindred_api::{
    config::Config,
    routes::{create_router, AppState},
    services::catalogs::{google_books::GoogleBooksCatalog, tmdb::TmdbCatalog, BookCatalog, MovieCatalog},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let books: Arc<dyn BookCatalog> = Arc::new(GoogleBooksCatalog::new(
        config.books_api_url.clone(),
        config.books_api_key.clone(),
    ));
    let movies: Arc<dyn MovieCatalog> = Arc::new(TmdbCatalog::new(
        config.tmdb_api_url.clone(),
        config.tmdb_api_key.clone(),
    ));

    let state = Arc::new(AppState::new(books, movies));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
