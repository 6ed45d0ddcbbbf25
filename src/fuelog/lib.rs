//! # Fuelog Architecture
//!
//! Fuelog is a **fuel-consumption tracking library** with a CLI client. The
//! library owns the record collection, its validation rules and the report
//! engine; the binary only parses arguments and prints results.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selector strings, "today")            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, reports, import/export                       │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - FuelLog: owned collection with a single commit path      │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records and ordering
//!
//! A [`model::FuelRecord`] is one refuelling: date, liters, odometer and an
//! optional price. The collection is always kept sorted by (date, odometer),
//! and every accepted record has an odometer strictly above its date
//! predecessor and strictly below its date successor. See [`validation`].
//!
//! ## Testing Strategy
//!
//! - **Commands** are tested against `InMemoryStore` via the fixtures in
//!   `store::memory::fixtures`.
//! - **Storage** is tested with `tempfile` directories.
//! - **The CLI** is tested end to end in `tests/` with `assert_cmd`.

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod report;
pub mod store;
pub mod validation;
