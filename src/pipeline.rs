//! Processing pipeline: ingestion and daily aggregation.
//!
//! Orchestrates one run: load the text log into the reading store unless
//! the store already holds data, then read every stored reading back and
//! build the indoor and outdoor daily series.

use crate::aggregate::build_daily_series;
use crate::config::ClimateConfig;
use crate::error::{ClimateError, Result};
use crate::models::DailySeries;
use crate::parser::{ParseStats, RecordParser, decode_bytes};
use crate::storage::ReadingStore;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// What ingestion did on this run
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// The log was parsed and its readings stored
    Loaded {
        source: PathBuf,
        inserted: usize,
        stats: ParseStats,
    },
    /// The store already held readings; the log was not read
    Skipped { existing: usize },
    /// The log was parsed but no line was valid; nothing was stored
    NoValidData { source: PathBuf, stats: ParseStats },
}

/// Result of a complete pipeline run
#[derive(Debug, Clone)]
pub struct ProcessingSummary {
    pub outcome: IngestOutcome,
    pub series: DailySeries,
    pub readings_used: usize,
    pub processing_time_ms: u128,
}

/// Main processor for a climate log and its reading store
pub struct ClimateProcessor<S: ReadingStore> {
    config: ClimateConfig,
    store: S,
    parser: RecordParser,
}

impl<S: ReadingStore> ClimateProcessor<S> {
    /// Create a processor over an already opened store
    pub fn new(config: ClimateConfig, store: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            parser: RecordParser::new()?,
        })
    }

    pub fn config(&self) -> &ClimateConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run ingestion followed by aggregation
    pub fn process(&mut self) -> Result<ProcessingSummary> {
        let start_time = Instant::now();

        let outcome = self.ingest()?;
        let readings = self.store.get_all()?;
        let series = build_daily_series(&readings, &self.config);

        Ok(ProcessingSummary {
            outcome,
            series,
            readings_used: readings.len(),
            processing_time_ms: start_time.elapsed().as_millis(),
        })
    }

    /// Load the input log into the store unless the store already has data
    pub fn ingest(&mut self) -> Result<IngestOutcome> {
        let existing = self.store.count()?;
        if existing > 0 {
            info!(
                "Store already holds {} readings, skipping ingestion",
                existing
            );
            return Ok(IngestOutcome::Skipped { existing });
        }

        let source = self.locate_input()?;
        info!("Reading climate log from {}", source.display());

        let bytes = std::fs::read(&source)?;
        let result = self.parser.parse(&decode_bytes(&bytes));

        for reason in result.stats.errors.iter().take(10) {
            debug!("Skipped {}", reason);
        }
        info!(
            "Parsed {} of {} lines ({:.1}% success, {} skipped)",
            result.stats.readings_parsed,
            result.stats.total_lines,
            result.stats.success_rate(),
            result.stats.records_skipped
        );

        if result.readings.is_empty() {
            warn!("No valid readings found in {}", source.display());
            return Ok(IngestOutcome::NoValidData {
                source,
                stats: result.stats,
            });
        }

        if !result.stats.is_successful() {
            warn!(
                "Only {} of {} lines in {} were usable; check the log format and location labels",
                result.stats.readings_parsed,
                result.stats.total_lines,
                source.display()
            );
        }

        let inserted = self.store.insert_many(&result.readings)?;
        Ok(IngestOutcome::Loaded {
            source,
            inserted,
            stats: result.stats,
        })
    }

    /// First existing input candidate
    fn locate_input(&self) -> Result<PathBuf> {
        self.config
            .input_candidates()
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ClimateError::InputNotFound {
                path: self.config.input_path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::fs;
    use tempfile::TempDir;

    const LOG: &str = "2024-10-01 08:00,outdoor,9.0,80\n\
                       2024-10-01 20:00,outdoor,11.0,90\n\
                       2024-10-01 12:00,indoor,21.0,40\n\
                       garbage line\n";

    fn config_for(temp_dir: &TempDir, content: Option<&str>) -> ClimateConfig {
        let input = temp_dir.path().join("log.csv");
        if let Some(content) = content {
            fs::write(&input, content).unwrap();
        }
        ClimateConfig::default()
            .with_input_path(input)
            .with_store_path(temp_dir.path().join("unused.parquet"))
    }

    #[test]
    fn test_ingest_loads_into_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir, Some(LOG));
        let mut processor = ClimateProcessor::new(config, MemoryStore::new()).unwrap();

        let summary = processor.process().unwrap();

        match summary.outcome {
            IngestOutcome::Loaded {
                inserted, stats, ..
            } => {
                assert_eq!(inserted, 3);
                assert_eq!(stats.records_skipped, 1);
                // 3 of 4 lines is below the warning threshold
                assert!(!stats.is_successful());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(summary.readings_used, 3);
        assert_eq!(summary.series.outdoor.len(), 1);
        assert_eq!(summary.series.outdoor[0].avg_temp, 10.0);
        assert_eq!(summary.series.indoor.len(), 1);
    }

    #[test]
    fn test_ingest_skipped_when_store_has_data() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir, Some(LOG));
        let mut processor = ClimateProcessor::new(config, MemoryStore::new()).unwrap();

        processor.ingest().unwrap();
        let second = processor.ingest().unwrap();

        assert_eq!(second, IngestOutcome::Skipped { existing: 3 });
        assert_eq!(processor.store().count().unwrap(), 3);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir, None);
        let mut processor = ClimateProcessor::new(config, MemoryStore::new()).unwrap();

        assert!(matches!(
            processor.ingest(),
            Err(ClimateError::InputNotFound { .. })
        ));
        assert!(processor.store().is_empty().unwrap());
    }

    #[test]
    fn test_clean_log_counts_as_successful() {
        let temp_dir = TempDir::new().unwrap();
        let clean: String = LOG.lines().take(3).map(|line| format!("{}\n", line)).collect();
        let config = config_for(&temp_dir, Some(&clean));
        let mut processor = ClimateProcessor::new(config, MemoryStore::new()).unwrap();

        match processor.ingest().unwrap() {
            IngestOutcome::Loaded { stats, .. } => {
                assert_eq!(stats.success_rate(), 100.0);
                assert!(stats.is_successful());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_no_valid_data_stores_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir, Some("nothing,to,see\n\n"));
        let mut processor = ClimateProcessor::new(config, MemoryStore::new()).unwrap();

        let summary = processor.process().unwrap();

        assert!(matches!(
            summary.outcome,
            IngestOutcome::NoValidData { .. }
        ));
        assert!(summary.series.is_empty());
        assert!(processor.store().is_empty().unwrap());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClimateConfig::default().with_labels("x", "X");
        assert!(ClimateProcessor::new(config, MemoryStore::new()).is_err());
    }
}
