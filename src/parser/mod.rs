//! Record parser for temperature/humidity text logs
//!
//! Turns raw log text into typed [`Reading`](crate::models::Reading)s. Lines
//! that do not have the expected shape, or whose fields fail to convert, are
//! skipped and counted; they never abort the batch.
//!
//! ## Architecture
//!
//! - [`normalize`] - text repair before matching (BOM, mangled minus signs)
//! - [`matcher`] - pure line matching into raw field groups
//! - [`record_parser`] - conversion of field groups into readings
//! - [`stats`] - parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use climate_log_processor::parser::RecordParser;
//!
//! # fn example() -> climate_log_processor::Result<()> {
//! let parser = RecordParser::new()?;
//! let result = parser.parse("2024-01-05 9:30,outdoor,-3,5,85\n");
//!
//! assert_eq!(result.readings.len(), 1);
//! assert_eq!(result.readings[0].temperature, -3.5);
//! # Ok(())
//! # }
//! ```

pub mod matcher;
pub mod normalize;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use matcher::{RawRecord, RecordMatcher};
pub use normalize::{decode_bytes, normalize_text};
pub use record_parser::{RejectReason, validate_record};
pub use stats::{ParseResult, ParseStats};

use crate::constants::MAX_RECORDED_ERRORS;
use crate::error::Result;
use crate::models::Reading;
use tracing::debug;

/// Log parser combining normalization, matching and validation
#[derive(Debug, Clone)]
pub struct RecordParser {
    matcher: RecordMatcher,
}

impl RecordParser {
    /// Create a parser with the standard record pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            matcher: RecordMatcher::new()?,
        })
    }

    /// Parse raw log text into readings in source order
    pub fn parse(&self, raw_text: &str) -> ParseResult {
        let text = normalize_text(raw_text);
        let mut stats = ParseStats::new();
        let mut readings = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            stats.total_lines += 1;

            let Some(raw) = self.matcher.match_line(line, index + 1) else {
                stats.record_skip(
                    format!("line {}: does not match record layout", index + 1),
                    MAX_RECORDED_ERRORS,
                );
                continue;
            };
            stats.matched_lines += 1;

            match validate_record(&raw) {
                Ok(reading) => {
                    readings.push(reading);
                    stats.readings_parsed += 1;
                }
                Err(reason) => {
                    stats.record_skip(
                        format!("line {}: {}", raw.line_number, reason),
                        MAX_RECORDED_ERRORS,
                    );
                }
            }
        }

        debug!(
            "Parsed {} readings from {} lines ({} skipped)",
            stats.readings_parsed, stats.total_lines, stats.records_skipped
        );

        ParseResult { readings, stats }
    }
}

/// Parse raw log text, keeping only the readings
pub fn parse_readings(raw_text: &str) -> Result<Vec<Reading>> {
    Ok(RecordParser::new()?.parse(raw_text).readings)
}
