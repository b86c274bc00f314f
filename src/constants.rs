//! Application constants for the climate log processor
//!
//! Thresholds, formats and default values shared by the parser, the
//! aggregator, the season detector and the report generator.

// =============================================================================
// Input Files and Normalization
// =============================================================================

/// Default input log file name
pub const DEFAULT_INPUT_FILE: &str = "readings.csv";

/// Default Parquet file used as the reading store
pub const DEFAULT_STORE_FILE: &str = "readings.parquet";

/// Default location labels
pub const DEFAULT_INDOOR_LABEL: &str = "indoor";
pub const DEFAULT_OUTDOOR_LABEL: &str = "outdoor";

/// Byte-order mark some spreadsheet exports put in front of the first line
pub const UTF8_BOM: char = '\u{feff}';

/// Minus-sign artifacts repaired to an ASCII hyphen before matching.
///
/// The first entry is U+2212 (MINUS SIGN) encoded as UTF-8 and then
/// decoded as Windows-1252, which is what the logger export produces.
/// The second is the unmangled U+2212 itself.
pub const MINUS_SIGN_ARTIFACTS: &[&str] = &["\u{e2}\u{2c6}\u{2019}", "\u{2212}"];

// =============================================================================
// Record Format
// =============================================================================

/// Line pattern: timestamp, location, temperature, humidity
///
/// The temperature accepts `.` or `,` as decimal separator, so a line like
/// `2024-01-05 9:30,outdoor,-3,5,85` still has exactly one valid split.
pub const RECORD_PATTERN: &str =
    r"^(\d{4}-\d{2}-\d{2}\s+\d{1,2}:\d{2}),\s*([^,]+),\s*([-+]?\d+(?:[.,]\d+)?),\s*(\d+)\s*$";

/// Accepted timestamp formats (two-digit and single-digit hour)
pub const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %-H:%M"];

/// Date format for report output and interactive lookups
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum number of rejection reasons kept in parse statistics
pub const MAX_RECORDED_ERRORS: usize = 100;

// =============================================================================
// Mold-Risk Heuristic
// =============================================================================

pub mod mold_risk {
    /// Below this mean humidity (% RH) no risk is modelled
    pub const HUMIDITY_THRESHOLD: f64 = 70.0;

    /// Humidity span over which risk rises from 0 to 1 (70..100 % RH)
    pub const HUMIDITY_SPAN: f64 = 30.0;

    /// Below this mean temperature (°C) no risk is modelled
    pub const TEMPERATURE_FLOOR: f64 = 0.0;

    /// Temperature at which the temperature factor starts rising
    pub const TEMPERATURE_BASE: f64 = 5.0;

    /// Temperature span over which the factor rises from 0 to 1 (5..25 °C)
    pub const TEMPERATURE_SPAN: f64 = 20.0;
}

// =============================================================================
// Seasons
// =============================================================================

pub mod seasons {
    /// Meteorological autumn: daily mean at or below 10 °C
    pub const AUTUMN_THRESHOLD: f64 = 10.0;

    /// Meteorological winter: daily mean at or below 0 °C
    pub const WINTER_THRESHOLD: f64 = 0.0;

    /// Number of consecutive qualifying days that start a season
    pub const RUN_LENGTH: usize = 5;
}

// =============================================================================
// Reports
// =============================================================================

/// Entries per top-N ranking
pub const DEFAULT_TOP_N: usize = 5;

/// Days shown in the chronological daily-mean listing
pub const DEFAULT_LISTING_DAYS: usize = 10;

/// Token that ends the interactive query loop
pub const QUIT_COMMAND: &str = "q";
