use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,
    pub sqlite_path: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AdminConfig {
    /// Bearer token for the HTTP seed route. The route is not mounted without it.
    #[serde(default)]
    pub token: Option<String>,
}

/// Where the pool connects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Postgres(String),
    SqliteUrl(String),
    SqliteFile(PathBuf),
}

impl DatabaseConfig {
    pub fn target(&self) -> DatabaseTarget {
        match self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) if url.starts_with("sqlite:") => DatabaseTarget::SqliteUrl(url.to_string()),
            Some(url) => DatabaseTarget::Postgres(normalize_database_url(url)),
            None => DatabaseTarget::SqliteFile(PathBuf::from(&self.sqlite_path)),
        }
    }
}

/// Hosting providers hand out `postgres://` URLs; rewrite them to the
/// canonical `postgresql://` scheme.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("database.sqlite_path", "arena.db")?
            .set_default("database.max_connections", 5_i64)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `ARENA_SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("ARENA").separator("__"))
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        s.try_deserialize()
    }
}
