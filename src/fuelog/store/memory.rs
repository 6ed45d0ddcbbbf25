use super::DataStore;
use crate::error::{FuelogError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw value, e.g. a corrupt document.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(FuelogError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::FuelRecord;
    use crate::store::FuelLog;
    use chrono::NaiveDate;

    /// Builds a `FuelLog` over an `InMemoryStore` with chronological records.
    pub struct LogFixture {
        records: Vec<FuelRecord>,
    }

    impl Default for LogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LogFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        /// Adds a record with a predictable id (`r1`, `r2`, ...).
        pub fn with_record(mut self, date: &str, odometer: u64, liters: f64, price: f64) -> Self {
            let id = format!("r{}", self.records.len() + 1);
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
            self.records.push(FuelRecord {
                id,
                date,
                liters,
                odometer,
                price,
            });
            self
        }

        /// `count` monthly fill-ups, 500 km and 40 L apart, starting 2024-01-01.
        pub fn with_monthly_records(mut self, count: u32) -> Self {
            for i in 0..count {
                let date = format!("{}-{:02}-01", 2024 + i / 12, i % 12 + 1);
                self = self.with_record(&date, 1000 + 500 * u64::from(i), 40.0, 800_000.0);
            }
            self
        }

        pub fn build(self) -> FuelLog<InMemoryStore> {
            let mut log = FuelLog::load(InMemoryStore::new());
            let records = self.records;
            log.commit(move |all| {
                *all = records;
                Ok(())
            })
            .unwrap();
            log
        }
    }
}
