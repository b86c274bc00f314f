//! Core data structures for climate log processing.
//!
//! Defines the parsed [`Reading`], the [`Location`] a series belongs to and
//! the derived per-day values produced by aggregation and reporting.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One timestamped observation from the input log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    /// Location label exactly as written in the log, trimmed
    pub location: String,
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent; 0..=100 is expected but not enforced
    pub humidity: i32,
}

impl Reading {
    pub fn new(
        timestamp: NaiveDateTime,
        location: impl Into<String>,
        temperature: f64,
        humidity: i32,
    ) -> Self {
        Self {
            timestamp,
            location: location.into(),
            temperature,
            humidity,
        }
    }

    /// Calendar date of the reading, time of day discarded
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Case-insensitive comparison against a location label
    pub fn is_at(&self, label: &str) -> bool {
        labels_match(&self.location, label)
    }
}

/// The two measurement sites a log distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Indoor,
    Outdoor,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Outdoor, Location::Indoor];

    /// Human-readable name used in report headings
    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Indoor => "Indoor",
            Location::Outdoor => "Outdoor",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Compare two location labels ignoring case
pub fn labels_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Aggregate of all readings for one location on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub avg_temp: f64,
    pub avg_humidity: f64,
    /// Mold-risk index in [0, 1], derived from the two means
    pub mold_risk: f64,
}

/// Absolute indoor/outdoor temperature difference on a shared date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyDifference {
    pub date: NaiveDate,
    pub difference: f64,
}

/// The two per-location daily series of one run, each sorted by date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub indoor: Vec<DailyStats>,
    pub outdoor: Vec<DailyStats>,
}

impl DailySeries {
    /// Get the series for a location
    pub fn for_location(&self, location: Location) -> &[DailyStats] {
        match location {
            Location::Indoor => &self.indoor,
            Location::Outdoor => &self.outdoor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indoor.is_empty() && self.outdoor.is_empty()
    }
}
