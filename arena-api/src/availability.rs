use arena_core::availability::{occupied_hours, AvailabilityQuery};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OccupiedHoursParams {
    pub quadra_id: Option<String>,
    pub data: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/horarios", get(get_occupied_hours))
}

/// GET /api/horarios?quadra_id=1&data=2025-09-02
/// Start hours already booked for the court on that day.
async fn get_occupied_hours(
    State(state): State<AppState>,
    Query(params): Query<OccupiedHoursParams>,
) -> Result<Json<Vec<u32>>, AppError> {
    let query = AvailabilityQuery::parse(params.quadra_id.as_deref(), params.data.as_deref())?;
    let (from, to) = query.day_window();

    let starts = state.bookings.booked_starts(query.court_id, from, to).await?;

    Ok(Json(occupied_hours(starts)))
}
