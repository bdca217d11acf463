//! Error handling.

use std::error::Error as StdError;

use displaydoc::Display;

pub type SkylogResult<T> = Result<T, SkylogError>;

/// An error.
#[derive(Debug, Display)]
pub enum SkylogError {
    /// Invalid property type "{name}"
    InvalidPropertyType { name: String },

    /// Invalid number "{value}"
    InvalidNumber { value: String },

    /// Invalid date "{value}" (expected format "{format}")
    InvalidDate { value: String, format: String },

    /// Invalid time "{value}" (expected format "{format}")
    InvalidTime { value: String, format: String },
}

impl SkylogError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidPropertyType { .. } => "InvalidPropertyType",
            Self::InvalidNumber { .. } => "InvalidNumber",
            Self::InvalidDate { .. } => "InvalidDate",
            Self::InvalidTime { .. } => "InvalidTime",
        }
    }
}

impl StdError for SkylogError {}
