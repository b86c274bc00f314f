//! Top-N rankings over a daily series

use crate::models::DailyStats;
use serde::{Deserialize, Serialize};

/// Daily value a ranking is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Temperature,
    Humidity,
    MoldRisk,
}

impl Metric {
    pub fn value(&self, day: &DailyStats) -> f64 {
        match self {
            Metric::Temperature => day.avg_temp,
            Metric::Humidity => day.avg_humidity,
            Metric::MoldRisk => day.mold_risk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The `n` days ranked first by `metric` in `order`
///
/// The sort is stable, so days with equal values keep their date order.
pub fn top_n(daily: &[DailyStats], metric: Metric, order: SortOrder, n: usize) -> Vec<DailyStats> {
    let mut ranked = daily.to_vec();
    ranked.sort_by(|a, b| {
        let ordering = metric.value(a).total_cmp(&metric.value(b));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    ranked.truncate(n);
    ranked
}

/// The first `n` days in date order
pub fn first_days(daily: &[DailyStats], n: usize) -> Vec<DailyStats> {
    daily.iter().take(n).copied().collect()
}
