//! Timestamps assembled from separate date and time fields.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{SkylogError, SkylogResult};

/// The default date format.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// The default time format.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Parses a date.
pub fn parse_date(value: &str, format: &str) -> SkylogResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format).map_err(|_| SkylogError::InvalidDate {
        value: value.to_owned(),
        format: format.to_owned(),
    })
}

/// Parses a time of day.
pub fn parse_time(value: &str, format: &str) -> SkylogResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), format).map_err(|_| SkylogError::InvalidTime {
        value: value.to_owned(),
        format: format.to_owned(),
    })
}

/// Combines a date and a time of day into a timestamp.
///
/// Only the hour and minute of the time are used; seconds are always zero.
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
    date.and_time(time)
}

/// Parses a date field and a time field into a timestamp.
pub fn parse_date_and_time(
    date: &str,
    time: &str,
    date_format: &str,
    time_format: &str,
) -> SkylogResult<NaiveDateTime> {
    let date = parse_date(date, date_format)?;
    let time = parse_time(time, time_format)?;

    Ok(combine(date, time))
}
