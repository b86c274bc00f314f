//! Conversion of matched field groups into typed readings
//!
//! Every field is trimmed before conversion. A field that fails to convert
//! rejects only its own record.

use super::matcher::RawRecord;
use crate::constants::TIMESTAMP_FORMATS;
use crate::models::Reading;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Why a matched record was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("empty location")]
    EmptyLocation,

    #[error("invalid temperature '{0}'")]
    InvalidTemperature(String),

    #[error("invalid humidity '{0}'")]
    InvalidHumidity(String),
}

/// Convert a matched record into a reading
pub fn validate_record(raw: &RawRecord<'_>) -> Result<Reading, RejectReason> {
    let timestamp = parse_timestamp(raw.timestamp)?;

    let location = raw.location.trim();
    if location.is_empty() {
        return Err(RejectReason::EmptyLocation);
    }

    let temperature = parse_temperature(raw.temperature)?;
    let humidity = parse_humidity(raw.humidity)?;

    Ok(Reading::new(timestamp, location, temperature, humidity))
}

/// Parse `YYYY-MM-DD H:MM` or `YYYY-MM-DD HH:MM`, rejecting impossible dates
///
/// Only the ends of the field are trimmed. Date and time must be separated
/// by exactly one space.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, RejectReason> {
    let trimmed = value.trim();
    let invalid = || RejectReason::InvalidTimestamp(trimmed.to_string());

    // chrono lets a format space match any whitespace run
    let (date, time) = trimmed.split_once(' ').ok_or_else(invalid)?;
    if date.contains(char::is_whitespace) || time.contains(char::is_whitespace) {
        return Err(invalid());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(invalid)
}

/// Parse a signed decimal accepting `.` or `,` as separator
pub fn parse_temperature(value: &str) -> Result<f64, RejectReason> {
    let normalized = value.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| RejectReason::InvalidTemperature(value.trim().to_string()))
}

/// Parse a whole-number humidity percentage
pub fn parse_humidity(value: &str) -> Result<i32, RejectReason> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| RejectReason::InvalidHumidity(value.trim().to_string()))
}
