//! Test utilities for record parser testing
//!
//! Shared log fixtures used across the parser test modules.

use chrono::{NaiveDate, NaiveDateTime};


/// Helper to build a timestamp from its parts
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Helper to create a small mixed log with one bad line of each kind
pub fn create_test_log() -> String {
    [
        "2024-01-05 9:30,outdoor,-3.5,85",
        "2024-01-05 14:00, indoor , 21,5, 40",
        "2024-01-05 15:00,outdoor,-1",
        "2024-02-30 10:00,outdoor,2.0,80",
        "not a record at all",
        "",
        "2024-01-06 07:15,Outdoor,+0.5,91",
    ]
    .join("\n")
}
