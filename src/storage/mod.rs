//! Reading storage
//!
//! The pipeline only needs a bulk insert and a read-all query, so storage
//! sits behind the small [`ReadingStore`] trait. [`ParquetStore`] persists
//! readings to a single Parquet file between runs; [`MemoryStore`] keeps
//! them in a `Vec` for tests and one-off runs.

pub mod memory;
pub mod parquet;

pub use memory::MemoryStore;
pub use parquet::ParquetStore;

use crate::error::Result;
use crate::models::Reading;

/// Port for persisting and querying parsed readings
pub trait ReadingStore {
    /// Append readings, returning how many were written
    fn insert_many(&mut self, readings: &[Reading]) -> Result<usize>;

    /// All stored readings in insertion order
    fn get_all(&self) -> Result<Vec<Reading>>;

    /// Number of stored readings
    fn count(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }
}
