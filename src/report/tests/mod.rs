//! Test utilities for report generation testing

use crate::aggregate::mold_risk;
use crate::models::DailyStats;
use chrono::NaiveDate;


pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Helper to create a daily entry with a consistent mold-risk index
pub fn day(date: NaiveDate, avg_temp: f64, avg_humidity: f64) -> DailyStats {
    DailyStats {
        date,
        avg_temp,
        avg_humidity,
        mold_risk: mold_risk(avg_temp, avg_humidity),
    }
}

/// Helper to create a series of consecutive days from (temp, humidity) pairs
pub fn series(start: NaiveDate, values: &[(f64, f64)]) -> Vec<DailyStats> {
    values
        .iter()
        .enumerate()
        .map(|(i, &(t, h))| day(start + chrono::Days::new(i as u64), t, h))
        .collect()
}
