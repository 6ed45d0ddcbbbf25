use super::{DataStore, RECORDS_KEY};
use crate::error::{FuelogError, Result};
use crate::model::{sort_records, FuelRecord};
use tracing::{debug, error, warn};

/// The record collection plus the storage it is mirrored to.
///
/// There is exactly one way to change the records: [`FuelLog::commit`].
/// Each commit runs the mutation on a working copy, re-sorts it into
/// (date, odometer) order and writes the whole collection back.
pub struct FuelLog<S: DataStore> {
    backend: S,
    records: Vec<FuelRecord>,
}

impl<S: DataStore> FuelLog<S> {
    /// Loads the stored collection. Never fails: unreadable or unparsable
    /// data is logged and the log starts empty.
    pub fn load(backend: S) -> Self {
        let records = Self::read_records(&backend).unwrap_or_else(|e| {
            warn!("{e}; starting with an empty log");
            Vec::new()
        });
        debug!(count = records.len(), "loaded fuel records");

        Self {
            backend,
            records,
        }
    }

    fn read_records(backend: &S) -> Result<Vec<FuelRecord>> {
        let raw = match backend.read(RECORDS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err(FuelogError::StorageRead(e.to_string())),
        };
        let mut records: Vec<FuelRecord> =
            serde_json::from_str(&raw).map_err(|e| FuelogError::StorageRead(e.to_string()))?;
        sort_records(&mut records);
        Ok(records)
    }

    /// Records in chronological order.
    pub fn records(&self) -> &[FuelRecord] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&FuelRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Applies `mutate` to the collection, then re-sorts and persists it.
    ///
    /// If `mutate` fails nothing changes. If persisting fails the change
    /// stays in memory, unsaved, and `StorageWrite` is returned; the next
    /// successful commit writes it out along with its own change.
    pub fn commit<T, F>(&mut self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<FuelRecord>) -> Result<T>,
    {
        let mut working = self.records.clone();
        let value = mutate(&mut working)?;
        sort_records(&mut working);
        self.records = working;
        self.save()?;
        Ok(value)
    }

    /// Writes the full collection to storage.
    fn save(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.records)?;
        match self.backend.write(RECORDS_KEY, &payload) {
            Ok(()) => {
                debug!(count = self.records.len(), "saved fuel records");
                Ok(())
            }
            Err(e) => {
                error!("failed to save fuel records: {e}");
                Err(FuelogError::StorageWrite(e.to_string()))
            }
        }
    }
}
