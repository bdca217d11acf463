#![deny(
    asm_sub_register,
    deprecated,
    missing_abi,
    unsafe_code,
    unused_macros,
    unused_must_use,
    unused_unsafe
)]
#![deny(clippy::from_over_into, clippy::needless_question_mark)]
#![cfg_attr(
    not(debug_assertions),
    deny(unused_imports, unused_mut, unused_variables,)
)]

pub mod config;
pub mod context;
pub mod database;
pub mod error;
pub mod import;
pub mod manager;

#[cfg(test)]
mod testing;

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{Database, DatabaseConnection};

use context::{ClaimRegistry, Context};
use database::migration::{Migrator, MigratorTrait};
use error::{StoreError, StoreResult};
use manager::Managers;

/// Handle to a flight log database.
///
/// All contexts created from one handle share natural key claims.
#[derive(Debug, Clone)]
pub struct Store {
    /// Handle to the database.
    database: DatabaseConnection,

    /// Natural key claims of all contexts.
    claims: Arc<ClaimRegistry>,
}

impl Store {
    /// Connects to a database by URL.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let database = Database::connect(url)
            .await
            .map_err(StoreError::database_error)?;

        Ok(Self::new(database))
    }

    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            database,
            claims: Arc::new(ClaimRegistry::default()),
        }
    }

    /// Sets how long contexts of this handle wait for each other's claims.
    ///
    /// Must be called before any context is created.
    pub fn with_claim_timeout(mut self, timeout: Duration) -> Self {
        self.claims = Arc::new(ClaimRegistry::new(timeout));
        self
    }

    /// Runs database migrations.
    pub async fn run_migrations(&self) -> StoreResult<()> {
        tracing::info!("Running migrations...");

        Migrator::up(&self.database, None)
            .await
            .map_err(StoreError::database_error)
    }

    /// Starts a new unit of work.
    pub fn context(&self) -> Arc<Context> {
        Arc::new(Context::new(self.database.clone(), self.claims.clone()))
    }

    /// Starts a new unit of work and returns all managers bound to it.
    pub fn managers(&self) -> Managers {
        Managers::new(self.context())
    }
}
