//! Seed command - Relational seed loading.

use std::time::Duration;

use crate::cli::args::{SeedAction, SeedArgs};
use crate::config::{Config, READY_POLL_INTERVAL_SECS};
use crate::errors::AppResult;
use crate::infra::{wait_until_ready, Database, SeedLoader};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    config.require_postgres()?;

    let db = wait_until_ready(
        "Postgres",
        config.ready_timeout,
        Duration::from_secs(READY_POLL_INTERVAL_SECS),
        || Database::connect(&config),
    )
    .await?;

    let loader = SeedLoader::new(&config.seed_dir);

    match args.action {
        SeedAction::Run => {
            tracing::info!("Seeding from {}...", loader.dir().display());
            let report = loader.run(&db).await?;
            for name in &report.applied {
                println!("applied: {}", name);
            }
            for name in &report.skipped {
                println!("skipped: {}", name);
            }
        }
        SeedAction::Status => {
            tracing::info!("Checking seed status...");
            for (name, applied) in loader.status(&db).await? {
                let status_str = if applied { "applied" } else { "pending" };
                println!("{}: {}", name, status_str);
            }
        }
    }

    Ok(())
}
