//! In-memory reading store

use super::ReadingStore;
use crate::error::Result;
use crate::models::Reading;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    readings: Vec<Reading>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadingStore for MemoryStore {
    fn insert_many(&mut self, readings: &[Reading]) -> Result<usize> {
        self.readings.extend_from_slice(readings);
        Ok(readings.len())
    }

    fn get_all(&self) -> Result<Vec<Reading>> {
        Ok(self.readings.clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.readings.len())
    }
}
