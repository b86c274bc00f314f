//! Error handling for climate log processing.
//!
//! Per-line parse failures are not errors: they are counted in
//! [`crate::parser::ParseStats`] and the line is dropped. The variants
//! here cover the failures that stop a run or a storage operation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid record pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Storage failure in {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid date '{input}' (expected YYYY-MM-DD)")]
    InvalidDate { input: String },
}

impl ClimateError {
    /// Create a storage error for the given backing file
    pub fn storage(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Storage {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClimateError>;
