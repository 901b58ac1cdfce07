//! Graph command - Neo4j schema, reset and sync.

use std::path::Path;
use std::time::Duration;

use crate::cli::args::{GraphAction, GraphArgs};
use crate::config::{Config, GraphConfig, READY_POLL_INTERVAL_SECS};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    wait_until_ready, Database, GraphSchema, GraphStore, GraphSync, TableReader,
};

/// Execute the graph command
pub async fn execute(args: GraphArgs, config: Config) -> AppResult<()> {
    let graph_config = config.require_graph()?;

    match args.action {
        GraphAction::Init { file } => {
            let schema = load_schema(file.as_deref())?;
            schema.validate()?;

            let store = connect_graph(graph_config, &config).await?;
            let count = store.apply_schema(&schema).await?;
            println!("Applied {} schema statement(s)", count);
        }
        GraphAction::Reset { yes } => {
            if !yes {
                return Err(AppError::config(
                    "graph reset deletes every node; pass --yes to confirm",
                ));
            }
            let store = connect_graph(graph_config, &config).await?;
            store.reset().await?;
            println!("Graph cleared");
        }
        GraphAction::Sync { init } => {
            config.require_postgres()?;
            let db = wait_until_ready(
                "Postgres",
                config.ready_timeout,
                Duration::from_secs(READY_POLL_INTERVAL_SECS),
                || Database::connect(&config),
            )
            .await?;
            let store = connect_graph(graph_config, &config).await?;

            if init {
                store.apply_schema(&GraphSchema::default()).await?;
            }

            let report = GraphSync::new(TableReader::new(db.get_connection()), &store)
                .run()
                .await?;
            println!(
                "Synced {} categories, {} products, {} customers, {} orders, {} order items, {} events",
                report.categories,
                report.products,
                report.customers,
                report.orders,
                report.order_items,
                report.events
            );
            if report.skipped_events > 0 {
                println!("Skipped {} event(s) of unknown type", report.skipped_events);
            }
        }
    }

    Ok(())
}

/// Read a Cypher script from `path`, or fall back to the bundled schema.
fn load_schema(path: Option<&Path>) -> AppResult<GraphSchema> {
    match path {
        Some(path) => {
            let script = std::fs::read_to_string(path).map_err(|e| {
                AppError::config(format!("Cannot read {}: {}", path.display(), e))
            })?;
            let schema = GraphSchema::parse(&script);
            if schema.is_empty() {
                return Err(AppError::config(format!(
                    "{} contains no statements",
                    path.display()
                )));
            }
            Ok(schema)
        }
        None => Ok(GraphSchema::default()),
    }
}

/// Connect and ping until Neo4j answers.
async fn connect_graph(graph_config: &GraphConfig, config: &Config) -> AppResult<GraphStore> {
    wait_until_ready(
        "Neo4j",
        config.ready_timeout,
        Duration::from_secs(READY_POLL_INTERVAL_SECS),
        move || async move {
            let store = GraphStore::connect(graph_config).await?;
            store.ping().await?;
            Ok::<_, AppError>(store)
        },
    )
    .await
}
