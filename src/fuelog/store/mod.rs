//! # Storage Layer
//!
//! fuelog persists the whole record collection as one JSON document under a
//! single key. The layer is split in two:
//!
//! - [`DataStore`]: raw key/value I/O. Knows nothing about records.
//!   - [`fs::FileStore`]: production, one `<key>.json` file per key
//!   - [`memory::InMemoryStore`]: tests, with write-failure simulation
//!
//! - [`FuelLog`]: the owned record collection on top of a `DataStore`.
//!   Loaded once at startup, mutated only through [`FuelLog::commit`], which
//!   re-sorts and flushes the full collection after every change.
//!
//! ## Storage Format
//!
//! ```text
//! $FUELOG_HOME/
//! ├── records.json    # JSON array of FuelRecord, chronological order
//! └── config.json     # FuelogConfig
//! ```
//!
//! ## Failure Policy
//!
//! A missing or unreadable `records.json` is not fatal: it is logged and
//! the log starts empty. A failed write is logged and reported to the
//! caller, while the in-memory change is kept (unsaved) so the session can
//! continue.

use crate::error::Result;

pub mod fs;
pub mod fuel_log;
pub mod memory;

pub use fuel_log::FuelLog;

/// Key under which the record collection is stored.
pub const RECORDS_KEY: &str = "records";

/// Abstract key/value persistence.
pub trait DataStore {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
