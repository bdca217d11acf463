//! Error handling.

use std::error::Error as StdError;
use std::fmt;

use anyhow::Error as AnyError;
use displaydoc::Display;
use sea_orm::{DbErr, SqlErr};

use skylog::error::SkylogError;
use skylog::property::PropertyType;

pub type StoreResult<T> = Result<T, StoreError>;

/// The kind of record an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Address,
    Manufacturer,
    Model,
    Drone,
    Location,
    Operator,
    Flight,
    FlightProperty,
    FlightPropertyValue,
    Maintainer,
    MaintenanceRecord,
    User,
}

/// An error.
#[derive(Debug, Display)]
pub enum StoreError {
    /// {kind} {key} does not exist.
    NotFound { kind: EntityKind, key: String },

    /// {kind} {key} already exists.
    Exists { kind: EntityKind, key: String },

    /// Flight {flight_id} already has a value for single-instance property "{property}".
    ValueExists { flight_id: i64, property: String },

    /// Property "{property}" holds {expected} values, got a {actual} value.
    PropertyTypeMismatch {
        property: String,
        expected: PropertyType,
        actual: PropertyType,
    },

    /// {kind} {key} is claimed by another session.
    ClaimConflict { kind: EntityKind, key: String },

    /// The session has no open transaction.
    SessionClosed,

    /// Database error: {0}
    DatabaseError(AnyError),

    /// Password hashing error: {0}
    PasswordError(String),

    /// Error from the common components.
    SkylogError(SkylogError),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, key: impl fmt::Display) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn exists(kind: EntityKind, key: impl fmt::Display) -> Self {
        Self::Exists {
            kind,
            key: key.to_string(),
        }
    }

    pub fn database_error(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::DatabaseError(AnyError::new(error))
    }

    /// Converts a database error raised while writing a record.
    ///
    /// Unique constraint violations become [`StoreError::Exists`].
    pub fn write_error(error: DbErr, kind: EntityKind, key: impl fmt::Display) -> Self {
        match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::exists(kind, key),
            _ => Self::database_error(error),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::Exists { .. } => "Exists",
            Self::ValueExists { .. } => "ValueExists",
            Self::PropertyTypeMismatch { .. } => "PropertyTypeMismatch",
            Self::ClaimConflict { .. } => "ClaimConflict",
            Self::SessionClosed => "SessionClosed",
            Self::DatabaseError(_) => "DatabaseError",
            Self::PasswordError(_) => "PasswordError",
            Self::SkylogError(e) => e.name(),
        }
    }

    /// Returns whether this is a NotFound error for the given kind.
    pub fn is_not_found(&self, kind: EntityKind) -> bool {
        matches!(self, Self::NotFound { kind: k, .. } if *k == kind)
    }

    /// Returns whether this is an Exists error for the given kind.
    pub fn is_exists(&self, kind: EntityKind) -> bool {
        matches!(self, Self::Exists { kind: k, .. } if *k == kind)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Address => "Address",
            Self::Manufacturer => "Manufacturer",
            Self::Model => "Model",
            Self::Drone => "Drone",
            Self::Location => "Location",
            Self::Operator => "Operator",
            Self::Flight => "Flight",
            Self::FlightProperty => "Flight property",
            Self::FlightPropertyValue => "Flight property value",
            Self::Maintainer => "Maintainer",
            Self::MaintenanceRecord => "Maintenance record",
            Self::User => "User",
        };

        f.write_str(name)
    }
}

impl StdError for StoreError {}

impl From<DbErr> for StoreError {
    fn from(error: DbErr) -> Self {
        Self::database_error(error)
    }
}

impl From<SkylogError> for StoreError {
    fn from(error: SkylogError) -> Self {
        Self::SkylogError(error)
    }
}

impl From<argon2::password_hash::Error> for StoreError {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self::PasswordError(error.to_string())
    }
}
