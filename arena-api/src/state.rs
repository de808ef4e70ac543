use std::sync::Arc;

use arena_core::{BookingRepository, CourtRepository};
use arena_store::DbClient;

#[derive(Clone)]
pub struct AppState {
    pub courts: Arc<dyn CourtRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    /// Bearer token guarding the seed route; `None` leaves the route unmounted.
    pub admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(db: &DbClient, admin_token: Option<String>) -> Self {
        Self {
            courts: db.court_repository(),
            bookings: db.booking_repository(),
            admin_token: admin_token.filter(|t| !t.is_empty()).map(Arc::from),
        }
    }
}
