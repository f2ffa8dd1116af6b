use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::MovieMetadata,
    services::recommender::{self, DEFAULT_NEIGHBORS},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    /// Title to find neighbors for; must match a catalog title exactly
    pub title: String,
    /// Number of neighbors requested
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize {
    DEFAULT_NEIGHBORS
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub source_title: String,
    pub recommendations: Vec<RecommendedMovie>,
}

/// One ranked result with its enrichment record
#[derive(Debug, Serialize)]
pub struct RecommendedMovie {
    pub title: String,
    pub score: f64,
    pub metadata: MovieMetadata,
}

/// Handler for the recommendations endpoint
///
/// An unknown title yields an empty list with status 200; the UI renders
/// that as "no recommendations found". Enrichment runs sequentially per
/// result, and a provider failure for one title degrades that entry to the
/// unavailable sentinel without aborting the rest.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    if params.title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Title cannot be empty".to_string(),
        ));
    }

    let ranked = recommender::recommend(&params.title, &state.dataset, params.k);

    if ranked.is_empty() {
        tracing::info!(title = %params.title, "No recommendations found");
    }

    let mut recommendations = Vec::with_capacity(ranked.len());
    for entry in ranked {
        let metadata = state.metadata.fetch(&entry.movie.title).await;
        recommendations.push(RecommendedMovie {
            title: entry.movie.title.clone(),
            score: entry.score,
            metadata,
        });
    }

    tracing::info!(
        title = %params.title,
        k = params.k,
        results = recommendations.len(),
        "Recommendations served"
    );

    Ok(Json(RecommendationResponse {
        source_title: params.title,
        recommendations,
    }))
}
