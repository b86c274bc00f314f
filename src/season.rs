//! Meteorological season detection.
//!
//! A season starts on the first day of the earliest run of consecutive
//! qualifying days whose daily mean temperature is at or below a threshold.
//!
//! Runs are counted over positions in the date-sorted series, not over
//! calendar days: a day missing from the log does not break a streak.

use crate::config::ClimateConfig;
use crate::constants::seasons::RUN_LENGTH;
use crate::models::DailyStats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seasons detected from the outdoor series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Autumn, Season::Winter];

    /// Threshold temperature configured for this season
    pub fn threshold(&self, config: &ClimateConfig) -> f64 {
        match self {
            Season::Autumn => config.autumn_threshold,
            Season::Winter => config.winter_threshold,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Autumn => f.write_str("Meteorological autumn"),
            Season::Winter => f.write_str("Meteorological winter"),
        }
    }
}

/// Start dates found for each season, `None` when not yet occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub autumn: Option<NaiveDate>,
    pub winter: Option<NaiveDate>,
}

impl SeasonReport {
    /// Detect autumn and winter on a date-sorted outdoor series
    pub fn detect(outdoor: &[DailyStats], config: &ClimateConfig) -> Self {
        let start = |season: Season| {
            find_season_start_with_run(
                outdoor,
                season.threshold(config),
                config.season_run_length,
            )
        };

        Self {
            autumn: start(Season::Autumn),
            winter: start(Season::Winter),
        }
    }

    pub fn start_of(&self, season: Season) -> Option<NaiveDate> {
        match season {
            Season::Autumn => self.autumn,
            Season::Winter => self.winter,
        }
    }
}

/// First day of the earliest run of five qualifying days
pub fn find_season_start(daily: &[DailyStats], max_temp: f64) -> Option<NaiveDate> {
    find_season_start_with_run(daily, max_temp, RUN_LENGTH)
}

/// First day of the earliest run of `run_length` days at or below `max_temp`
///
/// `daily` must be sorted ascending by date.
pub fn find_season_start_with_run(
    daily: &[DailyStats],
    max_temp: f64,
    run_length: usize,
) -> Option<NaiveDate> {
    if run_length == 0 {
        return None;
    }

    let mut consecutive = 0usize;
    for (index, day) in daily.iter().enumerate() {
        if day.avg_temp <= max_temp {
            consecutive += 1;
            if consecutive >= run_length {
                return Some(daily[index + 1 - run_length].date);
            }
        } else {
            consecutive = 0;
        }
    }

    None
}
