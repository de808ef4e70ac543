pub mod availability;
pub mod booking;
pub mod court;
pub mod pii;
pub mod repository;
pub mod reservation;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use court::{Court, SeedOutcome};
pub use repository::{BookingRepository, CourtRepository, RepoResult};
pub use reservation::{ReservationRequest, ValidReservation};

/// Messages returned to API clients. The wire contract is in Portuguese.
pub mod messages {
    pub const MISSING_PARAMETERS: &str = "Parâmetros quadra_id e data são obrigatórios";
    pub const INVALID_RESERVATION: &str = "Dados inválidos ou incompletos.";
    pub const INVALID_DATE: &str = "Data inválida, use o formato AAAA-MM-DD.";
    pub const COURT_NOT_FOUND: &str = "Quadra não encontrada.";
    pub const RESERVATION_CONFIRMED: &str = "Horários agendados com sucesso!";
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{}", messages::MISSING_PARAMETERS)]
    MissingParameters,
    #[error("{}", messages::INVALID_RESERVATION)]
    InvalidReservation,
    #[error("{}", messages::INVALID_DATE)]
    InvalidDate(String),
    #[error("{}", messages::INVALID_RESERVATION)]
    InvalidTimestamp(String),
    #[error("{}", messages::COURT_NOT_FOUND)]
    CourtNotFound(i64),
}

pub type CoreResult<T> = Result<T, CoreError>;
