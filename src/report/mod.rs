//! Report generation over the two daily series
//!
//! All views are read-only: rankings and differences copy the days they
//! return, and the series built by the pipeline are never modified.
//!
//! - [`ranking`] - top-N by temperature, humidity or mold risk
//! - [`difference`] - indoor/outdoor temperature difference per shared date
//! - [`lookup`] - point queries by calendar date
//! - [`render`] - formatted text output

pub mod difference;
pub mod lookup;
pub mod ranking;
pub mod render;

#[cfg(test)]
pub mod tests;

pub use difference::{daily_differences, largest_differences};
pub use lookup::{DateLookup, find_day, lookup_date, parse_query_date};
pub use ranking::{Metric, SortOrder, first_days, top_n};
pub use render::{render_lookup, render_report};

use crate::config::ClimateConfig;
use crate::models::{DailyDifference, DailySeries, DailyStats};
use crate::season::SeasonReport;

/// One titled top-N list
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSection {
    pub title: &'static str,
    pub metric: Metric,
    pub days: Vec<DailyStats>,
}

impl RankedSection {
    fn build(
        title: &'static str,
        daily: &[DailyStats],
        metric: Metric,
        order: SortOrder,
        n: usize,
    ) -> Self {
        Self {
            title,
            metric,
            days: top_n(daily, metric, order, n),
        }
    }
}

/// Complete summary report for one run
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateReport {
    /// First days of the outdoor series with their mean temperature
    pub outdoor_listing: Vec<DailyStats>,
    pub outdoor_rankings: Vec<RankedSection>,
    pub seasons: SeasonReport,
    pub indoor_rankings: Vec<RankedSection>,
    pub differences: Vec<DailyDifference>,
}

impl ClimateReport {
    pub fn build(series: &DailySeries, config: &ClimateConfig) -> Self {
        let n = config.top_n;
        let outdoor = &series.outdoor;
        let indoor = &series.indoor;

        let outdoor_rankings = vec![
            RankedSection::build(
                "Warmest days outdoors",
                outdoor,
                Metric::Temperature,
                SortOrder::Descending,
                n,
            ),
            RankedSection::build(
                "Driest days outdoors",
                outdoor,
                Metric::Humidity,
                SortOrder::Ascending,
                n,
            ),
            RankedSection::build(
                "Most humid days outdoors",
                outdoor,
                Metric::Humidity,
                SortOrder::Descending,
                n,
            ),
            RankedSection::build(
                "Lowest mold risk outdoors",
                outdoor,
                Metric::MoldRisk,
                SortOrder::Ascending,
                n,
            ),
        ];

        let indoor_rankings = vec![
            RankedSection::build(
                "Warmest days indoors",
                indoor,
                Metric::Temperature,
                SortOrder::Descending,
                n,
            ),
            RankedSection::build(
                "Driest days indoors",
                indoor,
                Metric::Humidity,
                SortOrder::Ascending,
                n,
            ),
            RankedSection::build(
                "Highest mold risk indoors",
                indoor,
                Metric::MoldRisk,
                SortOrder::Descending,
                n,
            ),
        ];

        Self {
            outdoor_listing: first_days(outdoor, config.listing_days),
            outdoor_rankings,
            seasons: SeasonReport::detect(outdoor, config),
            indoor_rankings,
            differences: largest_differences(outdoor, indoor, n),
        }
    }
}
