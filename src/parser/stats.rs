//! Parsing statistics and result structures for log processing
//!
//! This module provides types for tracking how many lines were read,
//! matched and converted, and for handing the parsed readings downstream.

use crate::models::Reading;

/// Parsing result with readings and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed readings, in source order
    pub readings: Vec<Reading>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Non-blank lines encountered
    pub total_lines: usize,

    /// Lines whose layout matched the record pattern
    pub matched_lines: usize,

    /// Readings successfully converted
    pub readings_parsed: usize,

    /// Lines skipped, for layout or conversion reasons
    pub records_skipped: usize,

    /// First skip reasons, for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            matched_lines: 0,
            readings_parsed: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Count a skipped line, keeping at most `max_errors` reasons
    pub fn record_skip(&mut self, reason: String, max_errors: usize) {
        self.records_skipped += 1;
        if self.errors.len() < max_errors {
            self.errors.push(reason);
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.readings_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    ///
    /// Ingestion warns when a log falls below this.
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
