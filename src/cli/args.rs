//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shop Graph - seeded catalog service with an optional graph projection
#[derive(Parser, Debug)]
#[command(name = "shop-graph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Load the relational seed files
    Seed(SeedArgs),

    /// Manage the graph store
    Graph(GraphArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to [default: SERVER_HOST or 0.0.0.0]
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on [default: SERVER_PORT or 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Wait for Postgres and apply pending seed files before serving
    #[arg(long)]
    pub seed: bool,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub action: SeedAction,
}

/// Seed actions
#[derive(Subcommand, Debug)]
pub enum SeedAction {
    /// Apply pending seed files in order
    Run,
    /// Show which seed files have been applied
    Status,
}

/// Arguments for the graph command
#[derive(Parser, Debug)]
pub struct GraphArgs {
    #[command(subcommand)]
    pub action: GraphAction,
}

/// Graph store actions
#[derive(Subcommand, Debug)]
pub enum GraphAction {
    /// Declare constraints and indexes (idempotent)
    Init {
        /// Cypher script to apply instead of the bundled schema
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Delete every node and relationship
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Copy the relational tables into the graph
    Sync {
        /// Declare the schema before loading
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_with_seed() {
        let cli = Cli::try_parse_from(["shop-graph", "serve", "--seed", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.seed);
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.host, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_graph_reset_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["shop-graph", "graph", "reset"]).unwrap();
        match cli.command {
            Commands::Graph(GraphArgs {
                action: GraphAction::Reset { yes },
            }) => assert!(!yes),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_graph_init_with_file() {
        let cli =
            Cli::try_parse_from(["shop-graph", "-v", "graph", "init", "--file", "x.cypher"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Graph(GraphArgs {
                action: GraphAction::Init { file },
            }) => assert_eq!(file, Some(PathBuf::from("x.cypher"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
