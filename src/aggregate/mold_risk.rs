//! Mold-risk heuristic
//!
//! The index is the product of two factors, each clamped to [0, 1]:
//! humidity rising from 70 to 100 % RH and temperature rising from 5 to
//! 25 °C. Days that are drier than 70 % RH or below freezing score 0.

use crate::constants::mold_risk::{
    HUMIDITY_SPAN, HUMIDITY_THRESHOLD, TEMPERATURE_BASE, TEMPERATURE_FLOOR, TEMPERATURE_SPAN,
};

/// Mold-risk index in [0, 1] for a mean temperature (°C) and humidity (% RH)
pub fn mold_risk(temperature: f64, humidity: f64) -> f64 {
    if humidity < HUMIDITY_THRESHOLD || temperature < TEMPERATURE_FLOOR {
        return 0.0;
    }

    let humidity_factor = ((humidity - HUMIDITY_THRESHOLD) / HUMIDITY_SPAN).clamp(0.0, 1.0);
    let temperature_factor = ((temperature - TEMPERATURE_BASE) / TEMPERATURE_SPAN).clamp(0.0, 1.0);

    humidity_factor * temperature_factor
}
