//! CSV flight import.
//!
//! An import runs in two passes. Every row is first mapped to a
//! [`PendingFlight`], resolving drones, locations and operators against
//! the records that exist when the import starts. Only if every row maps
//! cleanly are the flights written, each one committed together with its
//! property values.
//!
//! The first failing row stops the import. Its position and the failure
//! are kept in [`FlightImporter::last_error`].

mod error;
mod header;
mod mapper;


use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::instrument;

use crate::config::ImportConfig;
use crate::manager::Managers;

pub use error::{ImportError, ImportResult};
pub use header::{BoundColumn, Header};
pub use mapper::{PendingFlight, RecordMapper};

/// The most recent row failure of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    /// 1-based position of the row after the header.
    pub row: usize,

    /// Human-readable description of the failure.
    pub message: String,

    /// The underlying failure.
    pub detail: String,
}

/// Imports flights from CSV files.
pub struct FlightImporter<'a> {
    managers: &'a Managers,
    config: ImportConfig,
    last_error: Option<ImportFailure>,
}

impl<'a> FlightImporter<'a> {
    pub fn new(managers: &'a Managers, config: ImportConfig) -> Self {
        Self {
            managers,
            config,
            last_error: None,
        }
    }

    /// Returns the failure of the last import, if it failed on a row.
    pub fn last_error(&self) -> Option<&ImportFailure> {
        self.last_error.as_ref()
    }

    /// Imports a CSV file, returning the number of flights written.
    #[instrument(skip(self))]
    pub async fn import_file(&mut self, path: &Path) -> ImportResult<usize> {
        let contents = tokio::fs::read(path).await?;
        self.import_reader(contents.as_slice()).await
    }

    /// Imports CSV data, returning the number of flights written.
    #[instrument(skip_all)]
    pub async fn import_reader<R: io::Read>(&mut self, reader: R) -> ImportResult<usize> {
        self.last_error = None;

        let pending = match self.map_all(reader).await {
            Ok(pending) => pending,
            Err(e) => {
                self.discard("mapping").await;
                return Err(e);
            }
        };

        tracing::info!("Mapped {} flights", pending.len());

        let mut written = 0;
        for flight in pending {
            let row = flight.row;

            if let Err(e) = self.write(flight).await {
                self.discard(&format!("record {}", row)).await;
                return Err(self.fail(row, e));
            }

            written += 1;
        }

        tracing::info!("Imported {} flights", written);

        Ok(written)
    }

    /// Maps every row, stopping at the first that fails.
    async fn map_all<R: io::Read>(&mut self, reader: R) -> ImportResult<Vec<PendingFlight>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let properties = self.managers.properties.list_properties().await?;
        let header = Header::bind(reader.headers()?, &properties);

        let drones = self.managers.drones.list(None).await?;
        let locations = self.managers.locations.list().await?;
        let operators = self.managers.operators.list(None).await?;
        let mapper = RecordMapper::new(&self.config, &header, drones, locations, operators)?;

        let mut pending = Vec::new();
        let mut failure = None;
        for (index, record) in reader.records().enumerate() {
            let row = index + 1;
            let mapped = record
                .map_err(ImportError::from)
                .and_then(|record| mapper.map(row, &record));

            match mapped {
                Ok(flight) => pending.push(flight),
                Err(e) => {
                    failure = Some((row, e));
                    break;
                }
            }
        }

        if let Some((row, e)) = failure {
            return Err(self.fail(row, e));
        }

        Ok(pending)
    }

    /// Rolls back the session after a failure.
    async fn discard(&self, stage: &str) {
        if let Err(e) = self.managers.rollback().await {
            tracing::warn!("Failed to roll back after {}: {}", stage, e);
        }
    }

    /// Writes a flight and its property values as one commit.
    async fn write(&self, pending: PendingFlight) -> ImportResult<()> {
        let flight = self.managers.flights.add(pending.flight).await?;

        for (property_id, value) in pending.values {
            self.managers
                .properties
                .add_property_value(flight.id, property_id, value)
                .await?;
        }

        self.managers.commit().await?;

        tracing::debug!("Wrote flight {} from record {}", flight.id, pending.row);

        Ok(())
    }

    fn fail(&mut self, row: usize, error: ImportError) -> ImportError {
        tracing::warn!("Record {}: {}", row, error);

        self.last_error = Some(ImportFailure {
            row,
            message: error.to_string(),
            detail: format!("{:?}", error),
        });

        error
    }
}
