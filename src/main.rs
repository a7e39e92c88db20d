//! List Items API - Main Entry Point

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use list_items_api::infrastructure::driven_adapters::config::AppConfig;
use list_items_api::infrastructure::driven_adapters::database::connect_repository;
use list_items_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!(backend = %config.storage.backend, "Configuration loaded successfully");

    // Connect storage; the table/collection is ready before the first request
    let repository = connect_repository(&config)
        .await
        .with_context(|| format!("failed to initialise {} storage", config.storage.backend))?;

    let app = build_router(AppState::new(config.storage.backend, repository));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Text logs by default, JSON lines when LOG_FORMAT=json
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "list_items_api=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
