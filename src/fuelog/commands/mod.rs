use crate::config::FuelogConfig;
use crate::index::DisplayRecord;
use crate::model::FuelRecord;
use crate::report::YearMonth;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod history;
pub mod import;
pub mod months;
pub mod report;
pub mod reset;

pub use report::ReportOutcome;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<FuelRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub report: Option<ReportOutcome>,
    pub months: Vec<YearMonth>,
    pub export_path: Option<PathBuf>,
    pub config: Option<FuelogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<FuelRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_report(mut self, report: ReportOutcome) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_months(mut self, months: Vec<YearMonth>) -> Self {
        self.months = months;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: FuelogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
