use axum::{extract::State, Json};

use crate::state::AppState;

/// Handler for the catalog listing endpoint
///
/// Returns every catalog title in stable catalog order; the UI feeds these
/// into its select box.
pub async fn list(State(state): State<AppState>) -> Json<Vec<String>> {
    let titles: Vec<String> = state.dataset.titles().map(str::to_string).collect();
    Json(titles)
}
