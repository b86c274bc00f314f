//! Line matching for the four-field record layout
//!
//! Matching is purely structural: it splits a line into its timestamp,
//! location, temperature and humidity groups without converting anything.
//! Conversion and validation live in [`super::record_parser`].

use crate::constants::RECORD_PATTERN;
use crate::error::Result;
use regex::Regex;

/// Field groups captured from one matching line, whitespace included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub timestamp: &'a str,
    pub location: &'a str,
    pub temperature: &'a str,
    pub humidity: &'a str,
    /// 1-based line number in the normalized input
    pub line_number: usize,
}

/// Compiled record pattern
#[derive(Debug, Clone)]
pub struct RecordMatcher {
    pattern: Regex,
}

impl RecordMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(RECORD_PATTERN)?,
        })
    }

    /// Match a single line, returning its field groups when the layout fits
    pub fn match_line<'a>(&self, line: &'a str, line_number: usize) -> Option<RawRecord<'a>> {
        let captures = self.pattern.captures(line)?;
        Some(RawRecord {
            timestamp: captures.get(1)?.as_str(),
            location: captures.get(2)?.as_str(),
            temperature: captures.get(3)?.as_str(),
            humidity: captures.get(4)?.as_str(),
            line_number,
        })
    }

    /// Match every line of a text, skipping lines with the wrong layout
    pub fn match_all<'a>(&'a self, text: &'a str) -> impl Iterator<Item = RawRecord<'a>> + 'a {
        text.lines()
            .enumerate()
            .filter_map(move |(index, line)| self.match_line(line, index + 1))
    }
}
