//! Parquet-backed reading store
//!
//! Readings live in one Parquet file with the columns `timestamp` (epoch
//! milliseconds), `location`, `temperature` and `humidity`. A missing file
//! is an empty store. Inserts rewrite the file with the existing rows
//! followed by the new ones, staged in a temp file and renamed into place.

use super::ReadingStore;
use crate::error::{ClimateError, Result};
use crate::models::Reading;
use chrono::DateTime;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const TIMESTAMP_COLUMN: &str = "timestamp";
const LOCATION_COLUMN: &str = "location";
const TEMPERATURE_COLUMN: &str = "temperature";
const HUMIDITY_COLUMN: &str = "humidity";

/// Reading store persisted to a Parquet file
#[derive(Debug, Clone)]
pub struct ParquetStore {
    path: PathBuf,
}

impl ParquetStore {
    /// Open a store at an explicit file path; the file is created on first insert
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_frame(&self) -> Result<Option<DataFrame>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)?;
        let df = ParquetReader::new(file).finish()?;
        Ok(Some(df))
    }

    /// Write the frame to a sibling temp file, then rename it over the store
    fn write_frame(&self, mut df: DataFrame) -> Result<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(parent)?;
        ParquetWriter::new(staged.as_file_mut())
            .finish(&mut df)
            .map_err(|e| {
                ClimateError::storage(&self.path, format!("Failed to write parquet: {}", e))
            })?;
        staged.persist(&self.path).map_err(|e| {
            ClimateError::storage(&self.path, format!("Failed to replace store: {}", e.error))
        })?;
        Ok(())
    }

    fn missing_value(&self, column: &str) -> ClimateError {
        ClimateError::storage(&self.path, format!("null value in column '{}'", column))
    }
}

/// Build a frame from readings in the store's column layout
fn readings_to_frame(readings: &[Reading]) -> PolarsResult<DataFrame> {
    let timestamps: Vec<i64> = readings
        .iter()
        .map(|r| r.timestamp.and_utc().timestamp_millis())
        .collect();
    let locations: Vec<&str> = readings.iter().map(|r| r.location.as_str()).collect();
    let temperatures: Vec<f64> = readings.iter().map(|r| r.temperature).collect();
    let humidities: Vec<i32> = readings.iter().map(|r| r.humidity).collect();

    DataFrame::new(vec![
        Column::new(TIMESTAMP_COLUMN.into(), timestamps),
        Column::new(LOCATION_COLUMN.into(), locations),
        Column::new(TEMPERATURE_COLUMN.into(), temperatures),
        Column::new(HUMIDITY_COLUMN.into(), humidities),
    ])
}

impl ReadingStore for ParquetStore {
    fn insert_many(&mut self, readings: &[Reading]) -> Result<usize> {
        if readings.is_empty() {
            return Ok(0);
        }

        let mut all = self.get_all()?;
        let existing = all.len();
        all.extend_from_slice(readings);

        self.write_frame(readings_to_frame(&all)?)?;

        debug!(
            "Stored {} readings in {} ({} already present)",
            readings.len(),
            self.path.display(),
            existing
        );
        Ok(readings.len())
    }

    fn get_all(&self) -> Result<Vec<Reading>> {
        let Some(df) = self.read_frame()? else {
            return Ok(Vec::new());
        };

        let timestamps = df.column(TIMESTAMP_COLUMN)?.as_materialized_series().i64()?;
        let locations = df.column(LOCATION_COLUMN)?.as_materialized_series().str()?;
        let temperatures = df
            .column(TEMPERATURE_COLUMN)?
            .as_materialized_series()
            .f64()?;
        let humidities = df.column(HUMIDITY_COLUMN)?.as_materialized_series().i32()?;

        let mut readings = Vec::with_capacity(df.height());
        for (((millis, location), temperature), humidity) in timestamps
            .into_iter()
            .zip(locations)
            .zip(temperatures)
            .zip(humidities)
        {
            let millis = millis.ok_or_else(|| self.missing_value(TIMESTAMP_COLUMN))?;
            let timestamp = DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| {
                    ClimateError::storage(&self.path, format!("timestamp out of range: {}", millis))
                })?
                .naive_utc();

            readings.push(Reading::new(
                timestamp,
                location.ok_or_else(|| self.missing_value(LOCATION_COLUMN))?,
                temperature.ok_or_else(|| self.missing_value(TEMPERATURE_COLUMN))?,
                humidity.ok_or_else(|| self.missing_value(HUMIDITY_COLUMN))?,
            ));
        }

        debug!("Loaded {} readings from {}", readings.len(), self.path.display());
        Ok(readings)
    }

    fn count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let count_df = LazyFrame::scan_parquet(&self.path, ScanArgsParquet::default())?
            .select([len()])
            .collect()?;
        count_df
            .column("len")?
            .get(0)?
            .try_extract::<usize>()
            .map_err(|e| {
                ClimateError::storage(&self.path, format!("Failed to read row count: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn reading(day: u32, hour: u32, location: &str, temp: f64, hum: i32) -> Reading {
        let timestamp = NaiveDate::from_ymd_opt(2024, 10, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap();
        Reading::new(timestamp, location, temp, hum)
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = ParquetStore::open(temp_dir.path().join("none.parquet"));

        assert!(store.is_empty().unwrap());
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_then_get_all_preserves_values_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ParquetStore::open(temp_dir.path().join("nested/readings.parquet"));
        let readings = vec![
            reading(2, 9, "Ute", -3.5, 85),
            reading(1, 14, "Inne", 21.25, 40),
        ];

        assert_eq!(store.insert_many(&readings).unwrap(), 2);
        assert!(store.path().exists());
        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.get_all().unwrap(), readings);
    }

    #[test]
    fn test_insert_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("readings.parquet");
        let mut store = ParquetStore::open(&path);

        store.insert_many(&[reading(1, 8, "outdoor", 4.0, 80)]).unwrap();
        store.insert_many(&[reading(2, 8, "outdoor", 5.0, 82)]).unwrap();

        let reopened = ParquetStore::open(&path);
        let all = reopened.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].temperature, 5.0);
    }

    #[test]
    fn test_insert_leaves_no_staging_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ParquetStore::open(temp_dir.path().join("readings.parquet"));

        store.insert_many(&[reading(1, 8, "outdoor", 4.0, 80)]).unwrap();
        store.insert_many(&[reading(2, 8, "outdoor", 5.0, 82)]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("readings.parquet")]);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_unreadable_store_is_an_error_not_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("readings.parquet");
        std::fs::write(&path, b"not a parquet file").unwrap();
        let store = ParquetStore::open(&path);

        assert!(store.count().is_err());
        assert!(store.is_empty().is_err());
    }

    #[test]
    fn test_empty_insert_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ParquetStore::open(temp_dir.path().join("readings.parquet"));

        assert_eq!(store.insert_many(&[]).unwrap(), 0);
        assert!(!store.path().exists());
    }
}
