//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Relational Store (PostgreSQL)
// =============================================================================

/// Default Postgres host
pub const DEFAULT_POSTGRES_HOST: &str = "localhost";

/// Default Postgres port
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default pool size
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Upper bound (seconds) for connecting, acquiring a pooled connection and
/// answering a store-backed request
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// Seeding
// =============================================================================

/// Directory holding the ordered `*.sql` seed files
pub const DEFAULT_SEED_DIR: &str = "db/seed";

/// File extension picked up by the seed loader
pub const SEED_FILE_EXTENSION: &str = "sql";

/// Ledger table recording applied seed files
pub const SEED_LEDGER_TABLE: &str = "seed_history";

// =============================================================================
// Graph Store (Neo4j)
// =============================================================================

/// Default Neo4j user
pub const DEFAULT_NEO4J_USER: &str = "neo4j";

/// Rows per UNWIND batch when syncing relational rows into the graph
pub const GRAPH_SYNC_BATCH_SIZE: usize = 1000;

// =============================================================================
// Readiness
// =============================================================================

/// How long to wait for a store to accept connections at startup
pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 60;

/// Delay between readiness probes
pub const READY_POLL_INTERVAL_SECS: u64 = 2;
