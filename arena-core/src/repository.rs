use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::booking::{Booking, NewBooking};
use crate::court::{Court, SeedOutcome};

pub type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Repository trait for the court catalog
#[async_trait]
pub trait CourtRepository: Send + Sync {
    /// All courts in id order.
    async fn list_courts(&self) -> RepoResult<Vec<Court>>;

    async fn get_court(&self, id: i64) -> RepoResult<Option<Court>>;

    /// Inserts the default court unless any court exists. Check and insert
    /// share one transaction.
    async fn ensure_default_court(&self) -> RepoResult<SeedOutcome>;
}

/// Repository trait for booking data access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts every booking in a single transaction: either all rows are
    /// committed or none are.
    async fn create_bookings(&self, bookings: &[NewBooking]) -> RepoResult<Vec<Booking>>;

    /// Start times of a court's bookings with `from <= start_at < to`, in id order.
    async fn booked_starts(
        &self,
        court_id: i64,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> RepoResult<Vec<NaiveDateTime>>;

    /// Cheap round trip used by the health probe.
    async fn ping(&self) -> RepoResult<()>;
}
