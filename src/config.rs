//! Configuration management and validation.
//!
//! All paths are explicit fields: the reading store is opened from
//! [`ClimateConfig::store_path`] rather than from a process-wide default.

use crate::constants::{
    DEFAULT_INDOOR_LABEL, DEFAULT_INPUT_FILE, DEFAULT_LISTING_DAYS, DEFAULT_OUTDOOR_LABEL,
    DEFAULT_STORE_FILE, DEFAULT_TOP_N, seasons,
};
use crate::error::{ClimateError, Result};
use crate::models::{Location, labels_match};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration for a processing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateConfig {
    /// Raw text log to ingest when the store is empty
    pub input_path: PathBuf,

    /// Parquet file backing the reading store
    pub store_path: PathBuf,

    /// Label identifying indoor readings (case-insensitive)
    pub indoor_label: String,

    /// Label identifying outdoor readings (case-insensitive)
    pub outdoor_label: String,

    /// Daily mean at or below which a day counts towards autumn
    pub autumn_threshold: f64,

    /// Daily mean at or below which a day counts towards winter
    pub winter_threshold: f64,

    /// Consecutive qualifying days required to start a season
    pub season_run_length: usize,

    /// Entries per ranking
    pub top_n: usize,

    /// Days in the chronological outdoor listing
    pub listing_days: usize,

    /// Run the interactive date lookup after the report
    pub interactive: bool,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            indoor_label: DEFAULT_INDOOR_LABEL.to_string(),
            outdoor_label: DEFAULT_OUTDOOR_LABEL.to_string(),
            autumn_threshold: seasons::AUTUMN_THRESHOLD,
            winter_threshold: seasons::WINTER_THRESHOLD,
            season_run_length: seasons::RUN_LENGTH,
            top_n: DEFAULT_TOP_N,
            listing_days: DEFAULT_LISTING_DAYS,
            interactive: true,
        }
    }
}

impl ClimateConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    /// Override both location labels, e.g. for a logger exporting `Inne`/`Ute`
    pub fn with_labels(mut self, indoor: impl Into<String>, outdoor: impl Into<String>) -> Self {
        self.indoor_label = indoor.into();
        self.outdoor_label = outdoor.into();
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn without_interactive(mut self) -> Self {
        self.interactive = false;
        self
    }

    /// Get the configured label for a location
    pub fn label_for(&self, location: Location) -> &str {
        match location {
            Location::Indoor => &self.indoor_label,
            Location::Outdoor => &self.outdoor_label,
        }
    }

    /// Candidate input paths: the configured path, then its file name in
    /// the working directory
    pub fn input_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.input_path.clone()];
        if let Some(file_name) = self.input_path.file_name() {
            let local = PathBuf::from(file_name);
            if local != self.input_path {
                candidates.push(local);
            }
        }
        candidates
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.season_run_length == 0 {
            return Err(ClimateError::configuration(
                "season_run_length must be at least 1",
            ));
        }
        if self.top_n == 0 {
            return Err(ClimateError::configuration("top_n must be at least 1"));
        }
        if self.indoor_label.trim().is_empty() || self.outdoor_label.trim().is_empty() {
            return Err(ClimateError::configuration(
                "location labels must not be empty",
            ));
        }
        if labels_match(&self.indoor_label, &self.outdoor_label) {
            return Err(ClimateError::configuration(format!(
                "indoor and outdoor labels must differ (both '{}')",
                self.indoor_label
            )));
        }
        Ok(())
    }
}
