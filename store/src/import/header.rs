//! Header binding.

use csv::StringRecord;

use super::error::{ImportError, ImportResult};
use crate::database::entity::flight_property::FlightPropertyModel;
use skylog::normalize;

/// A column of the import file.
#[derive(Debug, Clone)]
pub struct BoundColumn {
    /// Header of the column.
    pub name: String,

    /// The flight property the column holds values of, if any.
    pub property: Option<FlightPropertyModel>,
}

/// The columns of an import file, in file order.
#[derive(Debug, Clone)]
pub struct Header {
    columns: Vec<BoundColumn>,
}

impl Header {
    /// Binds each column whose header names a property, ignoring case,
    /// to that property.
    pub fn bind(headers: &StringRecord, properties: &[FlightPropertyModel]) -> Self {
        let columns = headers
            .iter()
            .map(|name| {
                let property = properties
                    .iter()
                    .find(|p| normalize::eq_ignore_case(&p.name, name))
                    .cloned();

                BoundColumn {
                    name: name.to_owned(),
                    property,
                }
            })
            .collect();

        Self { columns }
    }

    /// Returns the index of the column with the given header.
    pub fn field(&self, name: &str) -> ImportResult<usize> {
        self.columns
            .iter()
            .position(|c| normalize::eq_ignore_case(&c.name, name))
            .ok_or_else(|| ImportError::FieldNotFound {
                field: name.to_owned(),
            })
    }

    /// Returns the columns bound to properties with their indices.
    pub fn properties(&self) -> impl Iterator<Item = (usize, &FlightPropertyModel)> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.property.as_ref().map(|p| (i, p)))
    }

    pub fn columns(&self) -> &[BoundColumn] {
        &self.columns
    }
}
