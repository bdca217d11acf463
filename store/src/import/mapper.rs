//! Mapping of rows to flights.

use chrono::NaiveDateTime;
use csv::StringRecord;

use super::error::{ImportError, ImportResult};
use super::header::Header;
use crate::config::ImportConfig;
use crate::database::entity::drone::DroneModel;
use crate::database::entity::flight_property::FlightPropertyModel;
use crate::database::entity::location::LocationModel;
use crate::database::entity::operator::OperatorModel;
use crate::manager::NewFlight;
use skylog::normalize;
use skylog::property::PropertyValue;
use skylog::timestamp;

/// A flight read from a row, not yet written.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFlight {
    /// 1-based position of the row after the header.
    pub row: usize,

    pub flight: NewFlight,

    /// Property values of the flight, by property ID.
    pub values: Vec<(i64, PropertyValue)>,
}

/// Indices of the columns every file must have.
#[derive(Debug, Clone, Copy)]
struct Columns {
    drone: usize,
    location: usize,
    operator_number: usize,
    start_date: usize,
    start_time: usize,
    end_date: usize,
    end_time: usize,
}

/// Resolves rows against the records known when the import started.
pub struct RecordMapper<'a> {
    config: &'a ImportConfig,
    header: &'a Header,
    columns: Columns,
    drones: Vec<DroneModel>,
    locations: Vec<LocationModel>,
    operators: Vec<OperatorModel>,
}

impl<'a> RecordMapper<'a> {
    /// Creates a mapper, failing if a configured column is missing.
    pub fn new(
        config: &'a ImportConfig,
        header: &'a Header,
        drones: Vec<DroneModel>,
        locations: Vec<LocationModel>,
        operators: Vec<OperatorModel>,
    ) -> ImportResult<Self> {
        let columns = Columns {
            drone: header.field(&config.drone_column)?,
            location: header.field(&config.location_column)?,
            operator_number: header.field(&config.operator_number_column)?,
            start_date: header.field(&config.start_date_column)?,
            start_time: header.field(&config.start_time_column)?,
            end_date: header.field(&config.end_date_column)?,
            end_time: header.field(&config.end_time_column)?,
        };

        Ok(Self {
            config,
            header,
            columns,
            drones,
            locations,
            operators,
        })
    }

    pub fn map(&self, row: usize, record: &StringRecord) -> ImportResult<PendingFlight> {
        let drone_id = self.resolve_drone(cell(record, self.columns.drone))?;
        let location_id = self.resolve_location(cell(record, self.columns.location))?;
        let operator_id = self.resolve_operator(cell(record, self.columns.operator_number))?;

        let start = self.timestamp(record, self.columns.start_date, self.columns.start_time)?;
        let end = self.timestamp(record, self.columns.end_date, self.columns.end_time)?;

        let mut values = Vec::new();
        for (index, property) in self.header.properties() {
            let text = cell(record, index);
            if text.is_empty() {
                continue;
            }

            values.push((property.id, self.property_value(property, index, text)?));
        }

        Ok(PendingFlight {
            row,
            flight: NewFlight {
                operator_id,
                drone_id,
                location_id,
                start,
                end,
            },
            values,
        })
    }

    fn resolve_drone(&self, name: &str) -> ImportResult<i64> {
        let mut matches = self
            .drones
            .iter()
            .filter(|d| normalize::eq_ignore_case(&d.name, name));

        match (matches.next(), matches.next()) {
            (Some(drone), None) => Ok(drone.id),
            (None, _) => Err(ImportError::DroneNotFound {
                name: name.to_owned(),
            }),
            (Some(_), Some(_)) => Err(ImportError::TooManyDronesFound {
                name: name.to_owned(),
            }),
        }
    }

    /// Finds the one location whose name contains the cell text.
    ///
    /// A blank cell matches nothing.
    fn resolve_location(&self, name: &str) -> ImportResult<i64> {
        if normalize::clean(name).is_empty() {
            return Err(ImportError::LocationNotFound {
                name: name.to_owned(),
            });
        }

        let mut matches = self
            .locations
            .iter()
            .filter(|l| normalize::contains_ignore_case(&l.name, name));

        match (matches.next(), matches.next()) {
            (Some(location), None) => Ok(location.id),
            (None, _) => Err(ImportError::LocationNotFound {
                name: name.to_owned(),
            }),
            (Some(_), Some(_)) => Err(ImportError::TooManyLocationsFound {
                name: name.to_owned(),
            }),
        }
    }

    fn resolve_operator(&self, number: &str) -> ImportResult<i64> {
        let mut matches = self
            .operators
            .iter()
            .filter(|o| o.operator_number == number);

        match (matches.next(), matches.next()) {
            (Some(operator), None) => Ok(operator.id),
            (None, _) => Err(ImportError::OperatorNotFound {
                number: number.to_owned(),
            }),
            (Some(_), Some(_)) => Err(ImportError::TooManyOperatorsFound {
                number: number.to_owned(),
            }),
        }
    }

    fn timestamp(
        &self,
        record: &StringRecord,
        date: usize,
        time: usize,
    ) -> ImportResult<NaiveDateTime> {
        let date_text = cell(record, date);
        let time_text = cell(record, time);

        let date = timestamp::parse_date(date_text, &self.config.date_format)
            .map_err(|error| self.invalid(date, error))?;
        let time = timestamp::parse_time(time_text, &self.config.time_format)
            .map_err(|error| self.invalid(time, error))?;

        Ok(timestamp::combine(date, time))
    }

    fn property_value(
        &self,
        property: &FlightPropertyModel,
        index: usize,
        text: &str,
    ) -> ImportResult<PropertyValue> {
        PropertyValue::parse(
            property.property_type(),
            text,
            &self.config.date_format,
            &self.config.time_format,
        )
        .map_err(|error| self.invalid(index, error))
    }

    fn invalid(&self, index: usize, error: skylog::SkylogError) -> ImportError {
        let column = self
            .header
            .columns()
            .get(index)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        ImportError::InvalidCell { column, error }
    }
}

/// Returns the trimmed text of a cell, or an empty string past the end
/// of a short row.
fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).map(str::trim).unwrap_or("")
}
