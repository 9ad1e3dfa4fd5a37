mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod requests;
mod responses;
mod routes;

use anyhow::{Context, Result};
use auth::AppState;
use config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = db::connect(&config).await?;
    let app_state = AppState { pool: pool.clone() };

    let app = routes::create_router(app_state);
    let listener = tokio::net::TcpListener::bind(&config.app_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.app_address))?;

    tracing::info!("Server running on http://{}", config.app_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
