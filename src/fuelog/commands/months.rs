use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::report::available_months;
use crate::store::{DataStore, FuelLog};

/// Months that can be passed to `report --month`.
pub fn run<S: DataStore>(log: &FuelLog<S>) -> Result<CmdResult> {
    let months = available_months(log.records());
    let mut result = CmdResult::default();
    if months.is_empty() {
        result.add_message(CmdMessage::info("No records yet."));
    }
    Ok(result.with_months(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LogFixture;

    #[test]
    fn lists_months_with_records() {
        let log = LogFixture::new()
            .with_record("2024-01-03", 1000, 40.0, 0.0)
            .with_record("2024-01-28", 1400, 35.0, 0.0)
            .with_record("2024-03-10", 1900, 41.0, 0.0)
            .build();
        let months: Vec<String> = run(&log)
            .unwrap()
            .months
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(months, vec!["2024-03", "2024-01"]);
    }

    #[test]
    fn empty_log_reports_nothing() {
        let log = LogFixture::new().build();
        let result = run(&log).unwrap();
        assert!(result.months.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
