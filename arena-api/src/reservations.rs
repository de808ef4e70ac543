use arena_core::messages::{INVALID_RESERVATION, RESERVATION_CONFIRMED};
use arena_core::pii::MaskedPhone;
use arena_core::{CoreError, ReservationRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub sucesso: bool,
    pub mensagem: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/agendar", post(create_reservation))
}

/// POST /api/agendar
/// Books one hourly slot per entry in `horarios`. Every timestamp is parsed
/// before anything is written; rows are inserted in one transaction.
async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<ReservationRequest>, JsonRejection>,
) -> Result<Json<ReservationResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!("Unreadable reservation body: {}", rejection.body_text());
        AppError::Validation(INVALID_RESERVATION.to_string())
    })?;

    let reservation = req.validate()?;

    if state.courts.get_court(reservation.court_id).await?.is_none() {
        return Err(CoreError::CourtNotFound(reservation.court_id).into());
    }

    let created = state.bookings.create_bookings(&reservation.to_bookings()).await?;

    info!(
        "Reserved {} slot(s) on court {} for {}",
        created.len(),
        reservation.court_id,
        MaskedPhone(&reservation.customer_phone)
    );

    Ok(Json(ReservationResponse {
        sucesso: true,
        mensagem: RESERVATION_CONFIRMED.to_string(),
    }))
}
