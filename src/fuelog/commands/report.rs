use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::report::{build_report, DateRange, ReportFilter, ReportResult};
use crate::store::{DataStore, FuelLog};
use chrono::NaiveDate;

/// Why a report has no intervals, if it has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportState {
    Ready,
    /// The whole log holds fewer than two records
    NotEnoughData,
    /// The log is fine but nothing usable falls in the range
    EmptyRange,
}

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub range: DateRange,
    pub state: ReportState,
    pub report: ReportResult,
}

pub fn run<S: DataStore>(
    log: &FuelLog<S>,
    filter: &ReportFilter,
    today: NaiveDate,
) -> Result<CmdResult> {
    // An inverted range stops here; no report is computed
    let range = filter.resolve(today)?;
    let report = build_report(log.records(), range.start, range.end);

    let state = if log.len() < 2 {
        ReportState::NotEnoughData
    } else if report.is_empty() {
        ReportState::EmptyRange
    } else {
        ReportState::Ready
    };

    let mut result = CmdResult::default();
    match state {
        ReportState::NotEnoughData => result.add_message(CmdMessage::info(
            "Not enough data for a report: at least two fill-ups are needed.",
        )),
        ReportState::EmptyRange => result.add_message(CmdMessage::info(format!(
            "No data between {} and {}. Try a different range.",
            range.start, range.end
        ))),
        ReportState::Ready => {}
    }

    Ok(result.with_report(ReportOutcome {
        range,
        state,
        report,
    }))
}
