use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use reel_recs::{
    config::Config,
    dataset::Dataset,
    middleware::request_id::{make_span, request_id_middleware},
    routes::create_router,
    services::{providers::OmdbProvider, MetadataService},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Missing or malformed dataset is fatal: nothing to serve without it
    let dataset = Dataset::load(&config.dataset_path)?;
    tracing::info!(
        movies = dataset.len(),
        path = %config.dataset_path,
        "Catalog and similarity matrix loaded"
    );

    let provider = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));
    let metadata = MetadataService::with_capacity(provider, config.metadata_cache_capacity);

    let state = AppState {
        dataset: Arc::new(dataset),
        metadata,
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
