//! Database migrations owned by the service itself.
//!
//! The shop schema and data live in the SQL seed files; migrations here only
//! manage the bookkeeping the seed loader needs.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_seed_history;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_seed_history::Migration)]
    }
}
