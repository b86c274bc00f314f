//! Climate Log Processor Library
//!
//! Turns an indoor/outdoor temperature and humidity log into daily
//! statistics and reports.
//!
//! This library provides tools for:
//! - Parsing comma-separated climate logs with repair of mangled minus signs
//! - Persisting parsed readings in a Parquet-backed store between runs
//! - Aggregating readings into per-day means and a mold-risk index
//! - Detecting the start of meteorological autumn and winter
//! - Ranking days by temperature, humidity, mold risk and indoor/outdoor
//!   difference, and looking up single dates

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod season;
pub mod storage;

// Re-export commonly used types
pub use config::ClimateConfig;
pub use error::{ClimateError, Result};
pub use models::{DailyDifference, DailySeries, DailyStats, Location, Reading};
pub use pipeline::{ClimateProcessor, IngestOutcome, ProcessingSummary};
pub use season::{Season, SeasonReport, find_season_start};
pub use storage::{MemoryStore, ParquetStore, ReadingStore};
