//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all fuelog operations, whatever the UI.
//!
//! It:
//! - **Owns** the [`FuelLog`] and the data directory
//! - **Normalizes inputs** (selector strings → [`RecordSelector`])
//! - **Supplies "today"** to the date-dependent commands
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not hold business logic, write to stdout, or format anything.
//!
//! `FuelogApi<S: DataStore>` is generic over the storage backend:
//! `FuelogApi<FileStore>` in production, `FuelogApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::{FuelogError, Result};
use crate::index::RecordSelector;
use crate::model::RecordDraft;
use crate::report::ReportFilter;
use crate::store::{DataStore, FuelLog};
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct FuelogApi<S: DataStore> {
    log: FuelLog<S>,
    data_dir: PathBuf,
    today: Option<NaiveDate>,
}

impl<S: DataStore> FuelogApi<S> {
    pub fn new(log: FuelLog<S>, data_dir: PathBuf) -> Self {
        Self {
            log,
            data_dir,
            today: None,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn log(&self) -> &FuelLog<S> {
        &self.log
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn add_record(&mut self, draft: &RecordDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.log, draft)
    }

    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::run(&self.log)
    }

    pub fn edit_record(
        &mut self,
        selector: &str,
        changes: &RecordDraft,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::edit::run(&mut self.log, &selector, changes)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.log, &selectors)
    }

    pub fn report(&self, filter: &ReportFilter) -> Result<commands::CmdResult> {
        commands::report::run(&self.log, filter, self.today())
    }

    pub fn months(&self) -> Result<commands::CmdResult> {
        commands::months::run(&self.log)
    }

    pub fn export(&self, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.log, dir, self.today())
    }

    pub fn import(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.log, path)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.log)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}

fn parse_selector(input: &str) -> Result<RecordSelector> {
    RecordSelector::from_str(input).map_err(FuelogError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::report::{ReportOutcome, ReportState};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LogFixture;
    use crate::store::memory::InMemoryStore;

    fn api() -> FuelogApi<InMemoryStore> {
        let log = LogFixture::new().with_monthly_records(3).build();
        FuelogApi::new(log, PathBuf::from("/nonexistent"))
            .with_today(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn delete_parses_index_and_id_selectors() {
        let mut api = api();
        let result = api.delete_records(&["1", "r1"]).unwrap();
        assert_eq!(result.affected_records.len(), 2);
        assert_eq!(api.log().len(), 1);
    }

    #[test]
    fn empty_selector_is_an_api_error() {
        let mut api = api();
        let changes = RecordDraft {
            liters: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            api.edit_record(" ", &changes),
            Err(FuelogError::Api(_))
        ));
    }

    #[test]
    fn report_uses_pinned_today() {
        let api = api();
        let outcome = api
            .report(&ReportFilter::Trailing { days: 45 })
            .unwrap()
            .report
            .unwrap();
        assert_eq!(outcome.range.end, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(outcome.report.intervals.len(), 1);
    }

    #[test]
    fn history_dispatches() {
        assert_eq!(api().history().unwrap().listed_records.len(), 3);
    }
}
