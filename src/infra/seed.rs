//! Seed loader - ordered, run-once execution of SQL seed files.
//!
//! Files are picked up from a single directory and applied in file-name
//! order. Each file runs in its own transaction together with its ledger
//! entry, so a file is either fully applied and recorded or not at all.
//! The first failing file aborts the remaining sequence.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, Statement, TransactionTrait, Value,
};

use super::db::Database;
use crate::config::{SEED_FILE_EXTENSION, SEED_LEDGER_TABLE};
use crate::errors::{AppError, AppResult};

/// A seed script read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFile {
    pub name: String,
    pub path: PathBuf,
    pub sql: String,
}

/// Outcome of a seed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Files executed by this run, in order
    pub applied: Vec<String>,
    /// Files already recorded in the ledger
    pub skipped: Vec<String>,
}

/// Loads and applies the seed directory
#[derive(Debug, Clone)]
pub struct SeedLoader {
    dir: PathBuf,
}

impl SeedLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List the `*.sql` files of the seed directory sorted by file name.
    ///
    /// Subdirectories and other extensions are ignored.
    pub fn discover(&self) -> AppResult<Vec<SeedFile>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            AppError::internal(format!(
                "Cannot read seed directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AppError::internal(e.to_string()))?;
            let path = entry.path();
            let is_sql = path
                .extension()
                .map(|ext| ext == SEED_FILE_EXTENSION)
                .unwrap_or(false);
            if !path.is_file() || !is_sql {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let sql = fs::read_to_string(&path)
                .map_err(|e| AppError::seed(&name, format!("cannot read file: {}", e)))?;
            files.push(SeedFile { name, path, sql });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    /// Apply every seed file not yet recorded in the ledger.
    pub async fn run(&self, db: &Database) -> AppResult<SeedReport> {
        db.run_migrations().await.map_err(AppError::from_db)?;

        let files = self.discover()?;
        tracing::info!(
            "Found {} seed file(s) in {}",
            files.len(),
            self.dir.display()
        );

        let applied = applied_files(db.connection()).await?;
        let report = apply_pending(db.connection(), files, &applied).await?;

        tracing::info!(
            applied = report.applied.len(),
            skipped = report.skipped.len(),
            "Seeding finished"
        );
        Ok(report)
    }

    /// List every seed file with whether the ledger has it.
    pub async fn status(&self, db: &Database) -> AppResult<Vec<(String, bool)>> {
        db.run_migrations().await.map_err(AppError::from_db)?;
        let applied = applied_files(db.connection()).await?;
        Ok(seed_status(&self.discover()?, &applied))
    }
}

/// Pair each file with its applied flag.
pub fn seed_status(files: &[SeedFile], applied: &HashSet<String>) -> Vec<(String, bool)> {
    files
        .iter()
        .map(|f| (f.name.clone(), applied.contains(&f.name)))
        .collect()
}

/// Read the set of file names recorded in the ledger.
pub async fn applied_files<C: ConnectionTrait>(conn: &C) -> AppResult<HashSet<String>> {
    let rows = conn
        .query_all(Statement::from_string(
            conn.get_database_backend(),
            format!("SELECT file_name FROM {} ORDER BY file_name", SEED_LEDGER_TABLE),
        ))
        .await
        .map_err(AppError::from_db)?;

    rows.iter()
        .map(|row| {
            row.try_get::<String>("", "file_name")
                .map_err(AppError::from_db)
        })
        .collect()
}

/// Execute `files` in order, skipping those in `applied`.
pub async fn apply_pending(
    conn: &DatabaseConnection,
    files: Vec<SeedFile>,
    applied: &HashSet<String>,
) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    for file in files {
        if applied.contains(&file.name) {
            tracing::debug!("Seed file {} already applied, skipping", file.name);
            report.skipped.push(file.name);
            continue;
        }

        tracing::info!("Applying seed file {}", file.name);
        let txn = conn.begin().await.map_err(AppError::from_db)?;

        if !file.sql.trim().is_empty() {
            let outcome = txn.execute_unprepared(&file.sql).await;
            if let Err(e) = outcome {
                tracing::error!("Seed file {} failed: {}", file.name, e);
                if let Err(rollback) = txn.rollback().await {
                    tracing::warn!("Rollback after seed failure failed: {}", rollback);
                }
                return Err(AppError::seed(&file.name, e.to_string()));
            }
        }

        txn.execute(record_statement(conn.get_database_backend(), &file.name))
            .await
            .map_err(|e| AppError::seed(&file.name, format!("cannot record in ledger: {}", e)))?;
        txn.commit().await.map_err(AppError::from_db)?;

        report.applied.push(file.name);
    }

    Ok(report)
}

fn record_statement(backend: DbBackend, file_name: &str) -> Statement {
    Statement::from_sql_and_values(
        backend,
        format!("INSERT INTO {} (file_name) VALUES ($1)", SEED_LEDGER_TABLE),
        [Value::from(file_name.to_string())],
    )
}
