//! Flight property values.
//!
//! A flight property declares the type of value it holds. Values are
//! carried as a closed sum type so that a value can only ever be stored
//! in the field matching its type.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{SkylogError, SkylogResult};
use crate::normalize;
use crate::timestamp;

/// The declared type of a flight property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Date,
    Number,
    String,
}

/// A typed flight property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PropertyValue {
    Date(NaiveDateTime),
    Number(f64),
    String(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = SkylogError;

    fn from_str(s: &str) -> SkylogResult<Self> {
        match normalize::key(s).as_str() {
            "date" => Ok(Self::Date),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            _ => Err(SkylogError::InvalidPropertyType { name: s.to_owned() }),
        }
    }
}

impl PropertyValue {
    /// Parses a textual value as the given property type.
    ///
    /// Dates are accepted either as a bare date in `date_format`, or as
    /// a date followed by a space and a time in `time_format`.
    pub fn parse(
        ty: PropertyType,
        text: &str,
        date_format: &str,
        time_format: &str,
    ) -> SkylogResult<Self> {
        let text = text.trim();

        match ty {
            PropertyType::Number => text
                .parse::<f64>()
                .map(Self::Number)
                .map_err(|_| SkylogError::InvalidNumber {
                    value: text.to_owned(),
                }),
            PropertyType::String => Ok(Self::String(normalize::clean(text))),
            PropertyType::Date => {
                if let Ok(date) = timestamp::parse_date(text, date_format) {
                    return Ok(Self::Date(date.and_time(NaiveTime::MIN)));
                }

                let format = format!("{} {}", date_format, time_format);
                NaiveDateTime::parse_from_str(text, &format)
                    .map(Self::Date)
                    .map_err(|_| SkylogError::InvalidDate {
                        value: text.to_owned(),
                        format,
                    })
            }
        }
    }

    /// Returns the type of this value.
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::Date(_) => PropertyType::Date,
            Self::Number(_) => PropertyType::Number,
            Self::String(_) => PropertyType::String,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::timestamp::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};

    fn parse(ty: PropertyType, text: &str) -> SkylogResult<PropertyValue> {
        PropertyValue::parse(ty, text, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT)
    }

    #[test]
    fn test_property_type_from_str() {
        assert_eq!(PropertyType::Date, "Date".parse().unwrap());
        assert_eq!(PropertyType::Number, " number ".parse().unwrap());
        assert_eq!(PropertyType::String, "STRING".parse().unwrap());
        assert!("boolean".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_parse_number() {
        let value = parse(PropertyType::Number, " 12.5 ").unwrap();

        assert_eq!(PropertyValue::Number(12.5), value);
        assert_eq!(Some(12.5), value.as_number());
        assert_eq!(None, value.as_date());
        assert_eq!(None, value.as_string());

        assert!(parse(PropertyType::Number, "gusty").is_err());
    }

    #[test]
    fn test_parse_date() {
        let value = parse(PropertyType::Date, "01/02/2024").unwrap();
        assert_eq!("2024-02-01 00:00:00", value.as_date().unwrap().to_string());

        let value = parse(PropertyType::Date, "01/02/2024 13:05").unwrap();
        assert_eq!("2024-02-01 13:05:00", value.as_date().unwrap().to_string());
        assert_eq!(PropertyType::Date, value.property_type());

        assert!(parse(PropertyType::Date, "yesterday").is_err());
    }

    #[test]
    fn test_parse_string() {
        let value = parse(PropertyType::String, "  light   rain ").unwrap();

        assert_eq!(Some("light rain"), value.as_string());
    }

    #[test]
    fn test_serde() {
        let value = PropertyValue::Number(3.0);
        let json = serde_json::to_string(&value).unwrap();

        assert_eq!(r#"{"type":"number","value":3.0}"#, json);
        assert_eq!(value, serde_json::from_str(&json).unwrap());
    }
}
