//! Grouping of readings by calendar date

use super::mold_risk::mold_risk;
use crate::models::{DailyStats, Reading};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Running sums for one calendar date
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyAccumulator {
    pub temperature_sum: f64,
    pub humidity_sum: f64,
    pub count: usize,
}

impl DailyAccumulator {
    pub fn add(&mut self, reading: &Reading) {
        self.temperature_sum += reading.temperature;
        self.humidity_sum += f64::from(reading.humidity);
        self.count += 1;
    }

    /// Finish the day; `None` when no reading was added
    pub fn finish(&self, date: NaiveDate) -> Option<DailyStats> {
        if self.count == 0 {
            return None;
        }

        let n = self.count as f64;
        let avg_temp = self.temperature_sum / n;
        let avg_humidity = self.humidity_sum / n;

        Some(DailyStats {
            date,
            avg_temp,
            avg_humidity,
            mold_risk: mold_risk(avg_temp, avg_humidity),
        })
    }
}

/// Group readings by the date part of their timestamp, ascending by date
///
/// Dates without readings do not appear in the result.
pub fn aggregate_daily<'a, I>(readings: I) -> Vec<DailyStats>
where
    I: IntoIterator<Item = &'a Reading>,
{
    let mut days: BTreeMap<NaiveDate, DailyAccumulator> = BTreeMap::new();

    for reading in readings {
        days.entry(reading.date()).or_default().add(reading);
    }

    days.iter()
        .filter_map(|(date, accumulator)| accumulator.finish(*date))
        .collect()
}
