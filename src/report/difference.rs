//! Indoor/outdoor temperature difference per shared date

use crate::models::{DailyDifference, DailyStats};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Join two series on date and compute the absolute temperature difference
///
/// Dates present in only one series are dropped. The result follows the
/// date order of `outdoor`.
pub fn daily_differences(outdoor: &[DailyStats], indoor: &[DailyStats]) -> Vec<DailyDifference> {
    let indoor_by_date: HashMap<NaiveDate, &DailyStats> =
        indoor.iter().map(|day| (day.date, day)).collect();

    outdoor
        .iter()
        .filter_map(|out| {
            indoor_by_date.get(&out.date).map(|inside| DailyDifference {
                date: out.date,
                difference: (out.avg_temp - inside.avg_temp).abs(),
            })
        })
        .collect()
}

/// The `n` shared dates with the largest indoor/outdoor difference
pub fn largest_differences(
    outdoor: &[DailyStats],
    indoor: &[DailyStats],
    n: usize,
) -> Vec<DailyDifference> {
    let mut differences = daily_differences(outdoor, indoor);
    differences.sort_by(|a, b| b.difference.total_cmp(&a.difference));
    differences.truncate(n);
    differences
}
