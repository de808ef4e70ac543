use arena_core::court::CourtListing;
use axum::{extract::State, routing::get, Json, Router};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/quadras", get(list_courts))
}

/// GET /api/quadras
async fn list_courts(State(state): State<AppState>) -> Result<Json<Vec<CourtListing>>, AppError> {
    let courts = state.courts.list_courts().await?;
    Ok(Json(courts.iter().map(CourtListing::from).collect()))
}
