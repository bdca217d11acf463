//! Import errors.

use std::error::Error as StdError;
use std::io;

use displaydoc::Display;

use crate::error::StoreError;
use skylog::error::SkylogError;

pub type ImportResult<T> = Result<T, ImportError>;

/// An import error.
#[derive(Debug, Display)]
pub enum ImportError {
    /// The file has no "{field}" column.
    FieldNotFound { field: String },

    /// No drone is named "{name}".
    DroneNotFound { name: String },

    /// More than one drone is named "{name}".
    TooManyDronesFound { name: String },

    /// No location matches "{name}".
    LocationNotFound { name: String },

    /// More than one location matches "{name}".
    TooManyLocationsFound { name: String },

    /// No operator has number "{number}".
    OperatorNotFound { number: String },

    /// More than one operator has number "{number}".
    TooManyOperatorsFound { number: String },

    /// Invalid value in column "{column}": {error}
    InvalidCell { column: String, error: SkylogError },

    /// CSV error: {0}
    CsvError(csv::Error),

    /// I/O error: {0}
    IoError(io::Error),

    /// {0}
    StoreError(StoreError),
}

impl ImportError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FieldNotFound { .. } => "FieldNotFound",
            Self::DroneNotFound { .. } => "DroneNotFound",
            Self::TooManyDronesFound { .. } => "TooManyDronesFound",
            Self::LocationNotFound { .. } => "LocationNotFound",
            Self::TooManyLocationsFound { .. } => "TooManyLocationsFound",
            Self::OperatorNotFound { .. } => "OperatorNotFound",
            Self::TooManyOperatorsFound { .. } => "TooManyOperatorsFound",
            Self::InvalidCell { .. } => "InvalidCell",
            Self::CsvError(_) => "CsvError",
            Self::IoError(_) => "IoError",
            Self::StoreError(e) => e.name(),
        }
    }
}

impl StdError for ImportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidCell { error, .. } => Some(error),
            Self::CsvError(e) => Some(e),
            Self::IoError(e) => Some(e),
            Self::StoreError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for ImportError {
    fn from(error: csv::Error) -> Self {
        Self::CsvError(error)
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<StoreError> for ImportError {
    fn from(error: StoreError) -> Self {
        Self::StoreError(error)
    }
}
