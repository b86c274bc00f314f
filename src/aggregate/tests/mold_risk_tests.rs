//! Tests for the mold-risk heuristic

use crate::aggregate::mold_risk;

#[test]
fn test_below_humidity_threshold() {
    assert_eq!(mold_risk(10.0, 50.0), 0.0);
    assert_eq!(mold_risk(30.0, 69.9), 0.0);
}

#[test]
fn test_below_freezing() {
    assert_eq!(mold_risk(-1.0, 90.0), 0.0);
}

#[test]
fn test_saturation() {
    assert_eq!(mold_risk(25.0, 100.0), 1.0);
    assert_eq!(mold_risk(35.0, 120.0), 1.0);
}

#[test]
fn test_thresholds_score_zero() {
    // At exactly 70 % RH the humidity factor is 0
    assert_eq!(mold_risk(20.0, 70.0), 0.0);
    // Between 0 and 5 °C the temperature factor is 0
    assert_eq!(mold_risk(3.0, 95.0), 0.0);
}

#[test]
fn test_midpoint() {
    assert!((mold_risk(15.0, 85.0) - 0.25).abs() < 1e-12);
}

#[test]
fn test_monotonic_and_bounded() {
    let mut previous_row: Option<Vec<f64>> = None;

    for h in 0..=30 {
        let humidity = 70.0 + f64::from(h);
        let row: Vec<f64> = (0..=40)
            .map(|t| mold_risk(5.0 + f64::from(t) * 0.5, humidity))
            .collect();

        for pair in row.windows(2) {
            assert!(pair[1] >= pair[0], "not monotonic in temperature");
        }
        if let Some(prev) = &previous_row {
            for (above, below) in row.iter().zip(prev) {
                assert!(above >= below, "not monotonic in humidity");
            }
        }
        assert!(row.iter().all(|r| (0.0..=1.0).contains(r)));
        previous_row = Some(row);
    }
}
