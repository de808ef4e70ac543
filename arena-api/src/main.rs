use anyhow::Context;
use arena_api::{app, AppState};
use arena_store::app_config::Config;
use arena_store::DbClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Court booking service: HTTP API and admin commands.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Create the database tables.
    CreateDb,
    /// Insert the default court unless a court already exists.
    SeedCourt,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_api=debug,arena_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;
    let db = DbClient::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, &db).await,
        Command::CreateDb => create_db(&db).await,
        Command::SeedCourt => seed_court(&db).await,
    };

    db.close().await;
    result
}

async fn serve(config: &Config, db: &DbClient) -> anyhow::Result<()> {
    let state = AppState::new(db, config.admin.token.clone());
    let app = app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Arena API listening on {} ({})", addr, db.backend_name());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn create_db(db: &DbClient) -> anyhow::Result<()> {
    if let Err(e) = db.create_schema().await {
        tracing::error!("Schema creation failed: {}", e);
        anyhow::bail!("Não foi possível criar as tabelas do banco de dados.");
    }
    println!("Tabelas do banco de dados criadas com sucesso!");
    Ok(())
}

async fn seed_court(db: &DbClient) -> anyhow::Result<()> {
    let outcome = db
        .court_repository()
        .ensure_default_court()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to seed default court")?;
    println!("{}", outcome.message());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
