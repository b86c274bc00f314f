//! Daily aggregation of readings per location
//!
//! Readings are first restricted to one location label, then grouped by
//! calendar date into [`DailyStats`](crate::models::DailyStats) carrying the
//! mean temperature, mean humidity and mold-risk index of each day.

pub mod daily;
pub mod mold_risk;

#[cfg(test)]
pub mod tests;

pub use daily::{DailyAccumulator, aggregate_daily};
pub use mold_risk::mold_risk;

use crate::config::ClimateConfig;
use crate::models::{DailySeries, DailyStats, Location, Reading};
use tracing::debug;

/// Aggregate the readings whose location matches `label` (case-insensitive)
pub fn aggregate_location(readings: &[Reading], label: &str) -> Vec<DailyStats> {
    aggregate_daily(readings.iter().filter(|reading| reading.is_at(label)))
}

/// Build both daily series using the labels from the configuration
pub fn build_daily_series(readings: &[Reading], config: &ClimateConfig) -> DailySeries {
    let series = DailySeries {
        indoor: aggregate_location(readings, config.label_for(Location::Indoor)),
        outdoor: aggregate_location(readings, config.label_for(Location::Outdoor)),
    };

    debug!(
        "Aggregated {} readings into {} indoor and {} outdoor days",
        readings.len(),
        series.indoor.len(),
        series.outdoor.len()
    );

    series
}
