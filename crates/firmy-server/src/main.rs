//! Firmy Server — Application entry point.

mod config;

use anyhow::Context;
use firmy_api::AppState;
use firmy_db::DbManager;
use firmy_db::repository::SurrealRepositories;
use firmy_validation::RepositoryEntityValidator;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,firmy=debug")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(bind_addr = %config.bind_addr, "Starting Firmy server");

    let manager = DbManager::connect(&config.db)
        .await
        .context("failed to open the Firmy store")?;

    let repos = SurrealRepositories::new(manager.client().clone());
    let validator = RepositoryEntityValidator::new(repos.clone());
    let app = firmy_api::router(AppState::new(repos, validator));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!(bind_addr = %config.bind_addr, "Firmy server listening");

    axum::serve(listener, app).await.context("server error")?;

    tracing::info!("Firmy server stopped");
    Ok(())
}
