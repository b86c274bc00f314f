//! Test utilities for daily aggregation testing

use crate::models::Reading;
use chrono::NaiveDate;

// Test modules
mod daily_tests;
mod mold_risk_tests;

/// Helper to create a reading at a given date and time
pub fn reading(date: (i32, u32, u32), hour: u32, location: &str, temp: f64, hum: i32) -> Reading {
    let timestamp = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap();
    Reading::new(timestamp, location, temp, hum)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
