use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

use crate::availability::DATE_FORMAT;
use crate::booking::NewBooking;
use crate::{CoreError, CoreResult};

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_PHONE_DIGITS: usize = 10;
// Column widths of `customer_name` and `customer_phone`.
pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_PHONE_CHARS: usize = 20;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Body of `POST /api/agendar`. Every field is optional at the wire level so
/// that absent fields are reported as validation failures, not parse errors.
#[derive(Debug, Default, Deserialize)]
pub struct ReservationRequest {
    #[serde(default, deserialize_with = "lenient_court_id")]
    pub quadra_id: Option<i64>,
    #[serde(default)]
    pub horarios: Option<Vec<String>>,
    #[serde(default)]
    pub nome_cliente: Option<String>,
    #[serde(default)]
    pub telefone_cliente: Option<String>,
}

/// A reservation that passed every check; all slot starts are parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidReservation {
    pub court_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub starts: Vec<NaiveDateTime>,
}

impl ReservationRequest {
    pub fn validate(&self) -> CoreResult<ValidReservation> {
        let court_id = self.quadra_id.filter(|id| *id > 0);
        let slots = self.horarios.as_deref().filter(|s| !s.is_empty());
        let name = self.nome_cliente.as_deref().filter(|s| !s.is_empty());
        let phone = self.telefone_cliente.as_deref().filter(|s| !s.is_empty());

        let (Some(court_id), Some(slots), Some(name), Some(phone)) = (court_id, slots, name, phone) else {
            return Err(CoreError::InvalidReservation);
        };

        let name = name.trim();
        let name_chars = name.chars().count();
        if name_chars < MIN_NAME_CHARS || name_chars > MAX_NAME_CHARS {
            return Err(CoreError::InvalidReservation);
        }
        if phone_digits(phone) < MIN_PHONE_DIGITS || phone.chars().count() > MAX_PHONE_CHARS {
            return Err(CoreError::InvalidReservation);
        }

        let starts = slots
            .iter()
            .map(|raw| parse_slot_start(raw))
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(ValidReservation {
            court_id,
            customer_name: name.to_string(),
            customer_phone: phone.to_string(),
            starts,
        })
    }
}

impl ValidReservation {
    pub fn to_bookings(&self) -> Vec<NewBooking> {
        self.starts
            .iter()
            .map(|start| NewBooking::new(self.court_id, &self.customer_name, &self.customer_phone, *start))
            .collect()
    }
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

/// Parses an ISO-8601 slot start. Offsets are dropped and the wall-clock
/// time kept; a bare date means midnight.
pub fn parse_slot_start(raw: &str) -> CoreResult<NaiveDateTime> {
    let raw = raw.trim();

    for format in NAIVE_FORMATS {
        if let Ok(start) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(start);
        }
    }
    if let Ok(start) = DateTime::parse_from_rfc3339(raw) {
        return Ok(start.naive_local());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(CoreError::InvalidTimestamp(raw.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCourtId {
    Number(i64),
    Text(String),
}

fn lenient_court_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawCourtId>::deserialize(deserializer)? {
        Some(RawCourtId::Number(id)) => Some(id),
        Some(RawCourtId::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
