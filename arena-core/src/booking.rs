use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Every booking covers exactly one hour.
pub const SLOT_LENGTH_HOURS: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub court_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    #[default]
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(BookingStatus::Confirmed),
            other => Err(format!("unknown booking status: {other}")),
        }
    }
}

/// End of the slot starting at `start`.
pub fn slot_end(start: NaiveDateTime) -> NaiveDateTime {
    start + Duration::hours(SLOT_LENGTH_HOURS)
}

/// A booking row staged for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub court_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: BookingStatus,
}

impl NewBooking {
    pub fn new(court_id: i64, customer_name: &str, customer_phone: &str, start_at: NaiveDateTime) -> Self {
        Self {
            court_id,
            customer_name: customer_name.to_string(),
            customer_phone: customer_phone.to_string(),
            start_at,
            end_at: slot_end(start_at),
            status: BookingStatus::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn new_booking_ends_one_hour_later() {
        let booking = NewBooking::new(1, "Ana Silva", "11999998888", at(2025, 9, 2, 10));
        assert_eq!(booking.end_at, at(2025, 9, 2, 11));
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn late_slot_rolls_into_next_day() {
        assert_eq!(slot_end(at(2025, 12, 31, 23)), at(2026, 1, 1, 0));
    }

    #[test]
    fn status_text_round_trips() {
        let status: BookingStatus = BookingStatus::Confirmed.to_string().parse().unwrap();
        assert_eq!(status, BookingStatus::Confirmed);
        assert!("Cancelled".parse::<BookingStatus>().is_err());
    }
}
