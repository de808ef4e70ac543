pub mod app_config;
pub mod database;
pub mod repo;

pub use database::DbClient;
pub use repo::{PgArenaRepository, SqliteArenaRepository};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
