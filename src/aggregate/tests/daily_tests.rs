//! Tests for grouping readings into daily statistics

use super::*;
use crate::aggregate::{aggregate_daily, aggregate_location, build_daily_series, mold_risk};
use crate::config::ClimateConfig;
use crate::models::Location;

const EPSILON: f64 = 1e-9;

#[test]
fn test_same_date_any_time_grouped() {
    let readings = vec![
        reading((2024, 10, 1), 0, "outdoor", 8.0, 80),
        reading((2024, 10, 1), 12, "outdoor", 12.0, 90),
        reading((2024, 10, 1), 23, "outdoor", 10.0, 70),
    ];

    let daily = aggregate_daily(&readings);

    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].date, date(2024, 10, 1));
    assert!((daily[0].avg_temp - 10.0).abs() < EPSILON);
    assert!((daily[0].avg_humidity - 80.0).abs() < EPSILON);
}

#[test]
fn test_unweighted_means_per_day() {
    let readings = vec![
        reading((2024, 10, 2), 9, "outdoor", 1.5, 71),
        reading((2024, 10, 1), 9, "outdoor", 4.0, 90),
        reading((2024, 10, 2), 10, "outdoor", 2.5, 72),
        reading((2024, 10, 2), 11, "outdoor", 3.5, 76),
    ];

    let daily = aggregate_daily(&readings);

    assert_eq!(daily.len(), 2);
    // Sorted ascending by date regardless of input order
    assert_eq!(daily[0].date, date(2024, 10, 1));
    assert_eq!(daily[1].date, date(2024, 10, 2));
    assert!((daily[0].avg_temp - 4.0).abs() < EPSILON);
    assert!((daily[1].avg_temp - 2.5).abs() < EPSILON);
    assert!((daily[1].avg_humidity - 73.0).abs() < EPSILON);
}

#[test]
fn test_mold_risk_computed_from_means() {
    // Individual readings are below 70 % RH on one side, the mean is not
    let readings = vec![
        reading((2024, 7, 1), 9, "indoor", 10.0, 60),
        reading((2024, 7, 1), 15, "indoor", 20.0, 100),
    ];

    let daily = aggregate_daily(&readings);

    assert_eq!(daily[0].mold_risk, mold_risk(15.0, 80.0));
    assert!((daily[0].mold_risk - (10.0 / 30.0) * 0.5).abs() < EPSILON);
}

#[test]
fn test_no_synthetic_days() {
    let readings = vec![
        reading((2024, 10, 1), 9, "outdoor", 1.0, 80),
        reading((2024, 10, 5), 9, "outdoor", 2.0, 80),
    ];

    let daily = aggregate_daily(&readings);
    let dates: Vec<_> = daily.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2024, 10, 1), date(2024, 10, 5)]);
}

#[test]
fn test_empty_readings() {
    assert!(aggregate_daily(&Vec::<Reading>::new()).is_empty());
}

#[test]
fn test_location_filter_ignores_case() {
    let readings = vec![
        reading((2024, 10, 1), 9, "Ute", 4.0, 80),
        reading((2024, 10, 1), 10, "UTE", 6.0, 80),
        reading((2024, 10, 1), 11, "Inne", 21.0, 40),
        reading((2024, 10, 1), 12, "garage", 9.0, 60),
    ];

    let outdoor = aggregate_location(&readings, "ute");
    assert_eq!(outdoor.len(), 1);
    assert!((outdoor[0].avg_temp - 5.0).abs() < EPSILON);

    let config = ClimateConfig::default().with_labels("Inne", "Ute");
    let series = build_daily_series(&readings, &config);
    assert_eq!(series.for_location(Location::Outdoor).len(), 1);
    assert_eq!(series.indoor.len(), 1);
    assert!((series.indoor[0].avg_temp - 21.0).abs() < EPSILON);
}
