//! Point lookups by calendar date

use crate::constants::DATE_FORMAT;
use crate::error::{ClimateError, Result};
use crate::models::{DailySeries, DailyStats, Location};
use chrono::NaiveDate;

/// The day matching `date` in a date-sorted series
pub fn find_day(daily: &[DailyStats], date: NaiveDate) -> Option<DailyStats> {
    daily
        .binary_search_by_key(&date, |day| day.date)
        .ok()
        .map(|index| daily[index])
}

/// Result of a lookup against both series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateLookup {
    pub date: NaiveDate,
    pub outdoor: Option<DailyStats>,
    pub indoor: Option<DailyStats>,
}

impl DateLookup {
    pub fn for_location(&self, location: Location) -> Option<DailyStats> {
        match location {
            Location::Indoor => self.indoor,
            Location::Outdoor => self.outdoor,
        }
    }
}

/// Look up a date independently in each series
pub fn lookup_date(series: &DailySeries, date: NaiveDate) -> DateLookup {
    DateLookup {
        date,
        outdoor: find_day(&series.outdoor, date),
        indoor: find_day(&series.indoor, date),
    }
}

/// Parse a strict `YYYY-MM-DD` query date
pub fn parse_query_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ClimateError::InvalidDate {
        input: trimmed.to_string(),
    })
}
