use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use arena_core::{BookingRepository, CourtRepository};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use tracing::info;

use crate::app_config::{DatabaseConfig, DatabaseTarget};
use crate::repo::{PgArenaRepository, SqliteArenaRepository};
use crate::StoreError;

static POSTGRES_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!("../migrations/postgres");
static SQLITE_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!("../migrations/sqlite");

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Connection pool for whichever backend the configuration selects.
#[derive(Clone)]
pub enum DbClient {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DbClient {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        match config.target() {
            DatabaseTarget::Postgres(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(config.max_connections)
                    .acquire_timeout(ACQUIRE_TIMEOUT)
                    .connect(&url)
                    .await?;
                info!("Connected to PostgreSQL");
                Ok(Self::Postgres(pool))
            }
            DatabaseTarget::SqliteUrl(url) => {
                let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);
                Self::connect_sqlite(options, config.max_connections).await
            }
            DatabaseTarget::SqliteFile(path) => {
                info!("DATABASE_URL not set, using local database {}", path.display());
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);
                Self::connect_sqlite(options, config.max_connections).await
            }
        }
    }

    /// Private in-memory SQLite database with the schema applied.
    /// A single connection that never expires keeps the data alive.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let client = Self::Sqlite(pool);
        client.create_schema().await?;
        Ok(client)
    }

    async fn connect_sqlite(options: SqliteConnectOptions, max_connections: u32) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;
        Ok(Self::Sqlite(pool))
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            DbClient::Postgres(_) => "postgres",
            DbClient::Sqlite(_) => "sqlite",
        }
    }

    /// Creates the tables. Only the `create-db` command calls this against
    /// a persistent database.
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        info!("Running {} migrations...", self.backend_name());
        match self {
            DbClient::Postgres(pool) => POSTGRES_MIGRATIONS.run(pool).await?,
            DbClient::Sqlite(pool) => SQLITE_MIGRATIONS.run(pool).await?,
        }
        info!("Migrations completed successfully.");
        Ok(())
    }

    pub fn court_repository(&self) -> Arc<dyn CourtRepository> {
        match self {
            DbClient::Postgres(pool) => Arc::new(PgArenaRepository::new(pool.clone())),
            DbClient::Sqlite(pool) => Arc::new(SqliteArenaRepository::new(pool.clone())),
        }
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        match self {
            DbClient::Postgres(pool) => Arc::new(PgArenaRepository::new(pool.clone())),
            DbClient::Sqlite(pool) => Arc::new(SqliteArenaRepository::new(pool.clone())),
        }
    }

    pub async fn close(&self) {
        match self {
            DbClient::Postgres(pool) => pool.close().await,
            DbClient::Sqlite(pool) => pool.close().await,
        }
    }
}
