//! Serve command - Starts the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, READY_POLL_INTERVAL_SECS};
use crate::errors::{AppError, AppResult};
use crate::infra::{wait_until_ready, Database, SeedLoader};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let app = build_app(&config, args.seed).await?;

    // Start server
    let addr = bind_addr(&args, &config);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Connect, optionally seed, and build the router.
///
/// Without `seed` the pool is lazy: the server comes up while Postgres is
/// down and store-backed routes answer 503 until it is back.
pub async fn build_app(config: &Config, seed: bool) -> AppResult<Router> {
    config.require_postgres()?;

    let db = if seed {
        // Startup seeding needs the store up front; a failed seed is fatal.
        let db = wait_until_ready(
            "Postgres",
            config.ready_timeout,
            Duration::from_secs(READY_POLL_INTERVAL_SECS),
            || Database::connect(config),
        )
        .await?;

        let report = SeedLoader::new(&config.seed_dir).run(&db).await?;
        tracing::info!(
            "Seed step done: {} applied, {} already present",
            report.applied.len(),
            report.skipped.len()
        );
        db
    } else {
        Database::connect_lazy(config).await?
    };

    Ok(create_router(AppState::from_config(Arc::new(db), config)))
}

/// Command-line flags win over `SERVER_HOST`/`SERVER_PORT`.
fn bind_addr(args: &ServeArgs, config: &Config) -> String {
    format!(
        "{}:{}",
        args.host.as_deref().unwrap_or(&config.server_host),
        args.port.unwrap_or(config.server_port)
    )
}
