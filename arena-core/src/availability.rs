use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::{CoreError, CoreResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated input of an occupied-hours lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub court_id: i64,
    pub date: NaiveDate,
}

impl AvailabilityQuery {
    /// Both parameters are required. Empty strings count as missing.
    pub fn parse(court_id: Option<&str>, date: Option<&str>) -> CoreResult<Self> {
        let court_id = court_id.map(str::trim).filter(|s| !s.is_empty());
        let date = date.map(str::trim).filter(|s| !s.is_empty());

        let (Some(court_id), Some(date)) = (court_id, date) else {
            return Err(CoreError::MissingParameters);
        };

        let court_id = court_id
            .parse::<i64>()
            .map_err(|_| CoreError::MissingParameters)?;
        let date = parse_date(date)?;

        Ok(Self { court_id, date })
    }

    /// Half-open window `[date 00:00, date+1 00:00)`.
    pub fn day_window(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(NaiveTime::MIN);
        (start, start + Duration::days(1))
    }
}

pub fn parse_date(raw: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// Start hour (0-23) of each slot, in the given order. Duplicates are kept.
pub fn occupied_hours<I>(starts: I) -> Vec<u32>
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    starts.into_iter().map(|start| start.hour()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_query() {
        let query = AvailabilityQuery::parse(Some("1"), Some("2025-09-02")).unwrap();
        assert_eq!(query.court_id, 1);
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2025, 9, 2).unwrap());
    }

    #[test]
    fn missing_or_empty_parameters_are_rejected() {
        assert_eq!(
            AvailabilityQuery::parse(None, Some("2025-09-02")),
            Err(CoreError::MissingParameters)
        );
        assert_eq!(AvailabilityQuery::parse(Some("1"), None), Err(CoreError::MissingParameters));
        assert_eq!(
            AvailabilityQuery::parse(Some(""), Some("2025-09-02")),
            Err(CoreError::MissingParameters)
        );
        assert_eq!(AvailabilityQuery::parse(Some("1"), Some("  ")), Err(CoreError::MissingParameters));
    }

    #[test]
    fn malformed_date_is_a_client_error() {
        assert!(matches!(
            AvailabilityQuery::parse(Some("1"), Some("02/09/2025")),
            Err(CoreError::InvalidDate(_))
        ));
        assert!(matches!(
            AvailabilityQuery::parse(Some("1"), Some("2025-02-30")),
            Err(CoreError::InvalidDate(_))
        ));
    }

    #[test]
    fn day_window_spans_one_calendar_day() {
        let query = AvailabilityQuery::parse(Some("3"), Some("2025-09-02")).unwrap();
        let (from, to) = query.day_window();
        assert_eq!(from.to_string(), "2025-09-02 00:00:00");
        assert_eq!(to.to_string(), "2025-09-03 00:00:00");
    }

    #[test]
    fn hours_keep_order_and_duplicates() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
        let starts = [11, 10, 10].map(|h| day.and_hms_opt(h, 0, 0).unwrap());
        assert_eq!(occupied_hours(starts), vec![11, 10, 10]);
    }
}
