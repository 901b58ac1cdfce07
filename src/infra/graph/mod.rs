//! Graph store (Neo4j) integration.
//!
//! Optional: only the `graph` CLI commands construct a [`GraphStore`].
//! The HTTP service never depends on it.

pub mod schema;
pub mod sync;

use std::sync::Arc;

use neo4rs::{query, Graph, Query};

use crate::config::GraphConfig;
use crate::errors::AppResult;

pub use schema::{CypherStatement, GraphSchema, StatementKind, RESET_STATEMENT};
pub use sync::{GraphSync, SyncReport};

/// Length of statement previews in logs
const LOG_PREVIEW_CHARS: usize = 80;

/// Neo4j client wrapper
#[derive(Clone)]
pub struct GraphStore {
    graph: Arc<Graph>,
}

impl GraphStore {
    /// Connect to the configured Neo4j server.
    pub async fn connect(config: &GraphConfig) -> AppResult<Self> {
        tracing::info!("Connecting to Neo4j at {}", config.uri);
        let graph = Graph::new(&config.uri, &config.user, config.password()).await?;

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> AppResult<()> {
        let mut result = self.graph.execute(query("RETURN 1 AS ok")).await?;
        result.next().await?;
        Ok(())
    }

    /// Run a single query, discarding results.
    pub async fn run(&self, q: Query) -> AppResult<()> {
        self.graph.run(q).await?;
        Ok(())
    }

    /// Declare constraints and indexes. Safe to repeat.
    ///
    /// The schema is validated first, so destructive statements never run here.
    pub async fn apply_schema(&self, schema: &GraphSchema) -> AppResult<usize> {
        schema.validate()?;

        for stmt in schema.statements() {
            tracing::info!("Running Cypher statement: {}", stmt.preview(LOG_PREVIEW_CHARS));
            self.graph.run(query(&stmt.text)).await?;
        }

        tracing::info!("Graph schema applied ({} statements)", schema.len());
        Ok(schema.len())
    }

    /// Delete every node and relationship.
    pub async fn reset(&self) -> AppResult<()> {
        tracing::warn!("Deleting all nodes and relationships from the graph");
        self.graph.run(query(RESET_STATEMENT)).await?;
        tracing::info!("Graph reset complete");
        Ok(())
    }
}
