use arena_core::court::{DEFAULT_COURT_CATEGORY, DEFAULT_COURT_NAME, DEFAULT_HOURLY_PRICE};
use arena_core::{Booking, Court};
use chrono::NaiveDateTime;

// `$n` placeholders are understood by both PostgreSQL and SQLite.
const SELECT_COURTS: &str = "SELECT id, name, category, hourly_price FROM courts ORDER BY id";
const SELECT_COURT: &str = "SELECT id, name, category, hourly_price FROM courts WHERE id = $1";
const COUNT_COURTS: &str = "SELECT COUNT(*) FROM courts";
const INSERT_COURT: &str = r#"
    INSERT INTO courts (name, category, hourly_price)
    VALUES ($1, $2, $3)
    RETURNING id, name, category, hourly_price
"#;
const INSERT_BOOKING: &str = r#"
    INSERT INTO bookings (court_id, customer_name, customer_phone, start_at, end_at, status)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, court_id, customer_name, customer_phone, start_at, end_at, status
"#;
const SELECT_BOOKED_STARTS: &str = r#"
    SELECT start_at FROM bookings
    WHERE court_id = $1 AND start_at >= $2 AND start_at < $3
    ORDER BY id
"#;

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct CourtRow {
    id: i64,
    name: String,
    category: String,
    hourly_price: f64,
}

impl From<CourtRow> for Court {
    fn from(row: CourtRow) -> Self {
        Court {
            id: row.id,
            name: row.name,
            category: row.category,
            hourly_price: row.hourly_price,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    court_id: i64,
    customer_name: String,
    customer_phone: String,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
    status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = String;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: row.id,
            court_id: row.court_id,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            start_at: row.start_at,
            end_at: row.end_at,
            status: row.status.parse()?,
        })
    }
}

/// Implements both repository traits for a sqlx pool type. The SQL is shared;
/// only the driver differs.
macro_rules! arena_repository {
    ($name:ident, $db:ty, $pool:ty) => {
        pub struct $name {
            pool: $pool,
        }

        impl $name {
            pub fn new(pool: $pool) -> Self {
                Self { pool }
            }
        }

        #[async_trait::async_trait]
        impl arena_core::CourtRepository for $name {
            async fn list_courts(&self) -> arena_core::RepoResult<Vec<Court>> {
                let rows = sqlx::query_as::<$db, CourtRow>(SELECT_COURTS)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(rows.into_iter().map(Court::from).collect())
            }

            async fn get_court(&self, id: i64) -> arena_core::RepoResult<Option<Court>> {
                let row = sqlx::query_as::<$db, CourtRow>(SELECT_COURT)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?;
                Ok(row.map(Court::from))
            }

            async fn ensure_default_court(&self) -> arena_core::RepoResult<arena_core::SeedOutcome> {
                let mut tx = self.pool.begin().await?;

                let existing: i64 = sqlx::query_scalar::<$db, i64>(COUNT_COURTS)
                    .fetch_one(&mut *tx)
                    .await?;
                if existing > 0 {
                    tx.rollback().await?;
                    return Ok(arena_core::SeedOutcome::AlreadyExists);
                }

                let row = sqlx::query_as::<$db, CourtRow>(INSERT_COURT)
                    .bind(DEFAULT_COURT_NAME)
                    .bind(DEFAULT_COURT_CATEGORY)
                    .bind(DEFAULT_HOURLY_PRICE)
                    .fetch_one(&mut *tx)
                    .await?;
                tx.commit().await?;

                tracing::info!("Seeded default court {}", row.id);
                Ok(arena_core::SeedOutcome::Created(row.into()))
            }
        }

        #[async_trait::async_trait]
        impl arena_core::BookingRepository for $name {
            async fn create_bookings(
                &self,
                bookings: &[arena_core::NewBooking],
            ) -> arena_core::RepoResult<Vec<Booking>> {
                let mut tx = self.pool.begin().await?;
                let mut rows = Vec::with_capacity(bookings.len());

                for booking in bookings {
                    let inserted = sqlx::query_as::<$db, BookingRow>(INSERT_BOOKING)
                        .bind(booking.court_id)
                        .bind(booking.customer_name.as_str())
                        .bind(booking.customer_phone.as_str())
                        .bind(booking.start_at)
                        .bind(booking.end_at)
                        .bind(booking.status.as_str())
                        .fetch_one(&mut *tx)
                        .await;

                    match inserted {
                        Ok(row) => rows.push(row),
                        Err(e) => {
                            tracing::warn!("Rolling back reservation: {}", e);
                            tx.rollback().await?;
                            return Err(e.into());
                        }
                    }
                }

                tx.commit().await?;

                let created = rows
                    .into_iter()
                    .map(Booking::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(created)
            }

            async fn booked_starts(
                &self,
                court_id: i64,
                from: NaiveDateTime,
                to: NaiveDateTime,
            ) -> arena_core::RepoResult<Vec<NaiveDateTime>> {
                let starts = sqlx::query_scalar::<$db, NaiveDateTime>(SELECT_BOOKED_STARTS)
                    .bind(court_id)
                    .bind(from)
                    .bind(to)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(starts)
            }

            async fn ping(&self) -> arena_core::RepoResult<()> {
                sqlx::query("SELECT 1").execute(&self.pool).await?;
                Ok(())
            }
        }
    };
}

arena_repository!(PgArenaRepository, sqlx::Postgres, sqlx::PgPool);
arena_repository!(SqliteArenaRepository, sqlx::Sqlite, sqlx::SqlitePool);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbClient;
    use arena_core::{BookingStatus, NewBooking, SeedOutcome};
    use chrono::{NaiveDate, Timelike};

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn seeding_twice_creates_one_court() {
        let db = DbClient::in_memory().await.unwrap();
        let courts = db.court_repository();

        let court = match courts.ensure_default_court().await.unwrap() {
            SeedOutcome::Created(court) => court,
            other => panic!("expected a new court, got {other:?}"),
        };
        assert_eq!(court.id, 1);
        assert_eq!(court.name, "Quadra Principal");
        assert_eq!(court.category, "Futebol Society");
        assert_eq!(court.hourly_price, 70.0);

        assert_eq!(courts.ensure_default_court().await.unwrap(), SeedOutcome::AlreadyExists);

        let listed = courts.list_courts().await.unwrap();
        assert_eq!(listed, vec![court.clone()]);
        assert_eq!(courts.get_court(1).await.unwrap(), Some(court));
        assert_eq!(courts.get_court(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn bookings_round_trip_and_filter_by_court_and_day() {
        let db = DbClient::in_memory().await.unwrap();
        db.court_repository().ensure_default_court().await.unwrap();
        let bookings = db.booking_repository();

        let created = bookings
            .create_bookings(&[
                NewBooking::new(1, "Ana Silva", "11999998888", at(2, 10)),
                NewBooking::new(1, "Ana Silva", "11999998888", at(2, 11)),
                NewBooking::new(1, "Bruno", "21988887777", at(3, 10)),
            ])
            .await
            .unwrap();

        assert_eq!(created.len(), 3);
        for booking in &created {
            assert_eq!(booking.end_at - booking.start_at, chrono::Duration::hours(1));
            assert_eq!(booking.status, BookingStatus::Confirmed);
        }

        let day = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let starts = bookings
            .booked_starts(1, day, day + chrono::Duration::days(1))
            .await
            .unwrap();
        let hours: Vec<u32> = starts.iter().map(|s| s.hour()).collect();
        assert_eq!(hours, vec![10, 11]);

        let other_court = bookings
            .booked_starts(2, day, day + chrono::Duration::days(1))
            .await
            .unwrap();
        assert!(other_court.is_empty());
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_the_whole_batch() {
        let db = DbClient::in_memory().await.unwrap();
        db.court_repository().ensure_default_court().await.unwrap();
        let bookings = db.booking_repository();

        // Court 99 does not exist; the foreign key rejects the second row.
        let result = bookings
            .create_bookings(&[
                NewBooking::new(1, "Ana Silva", "11999998888", at(2, 10)),
                NewBooking::new(99, "Ana Silva", "11999998888", at(2, 11)),
            ])
            .await;
        assert!(result.is_err());

        let day = at(2, 0);
        let starts = bookings
            .booked_starts(1, day, day + chrono::Duration::days(1))
            .await
            .unwrap();
        assert!(starts.is_empty());
    }

    #[tokio::test]
    async fn ping_succeeds_on_live_pool() {
        let db = DbClient::in_memory().await.unwrap();
        db.booking_repository().ping().await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn postgres_schema_and_seed() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = crate::app_config::DatabaseConfig {
            url: Some(url),
            sqlite_path: String::new(),
            max_connections: 2,
        };
        let db = DbClient::connect(&config).await.expect("connect failed");
        db.create_schema().await.expect("migrations failed");

        let courts = db.court_repository();
        courts.ensure_default_court().await.unwrap();
        assert_eq!(courts.ensure_default_court().await.unwrap(), SeedOutcome::AlreadyExists);
        assert!(!courts.list_courts().await.unwrap().is_empty());
    }
}
