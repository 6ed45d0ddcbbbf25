use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DataStore, FuelLog};

use super::helpers::indexed_records;

pub fn run<S: DataStore>(log: &FuelLog<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(indexed_records(log)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LogFixture;

    #[test]
    fn lists_newest_first() {
        let log = LogFixture::new().with_monthly_records(3).build();
        let result = run(&log).unwrap();

        let ids: Vec<&str> = result
            .listed_records
            .iter()
            .map(|dr| dr.record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["r3", "r2", "r1"]);
        assert_eq!(result.listed_records[0].distance, Some(500));
    }

    #[test]
    fn empty_log_lists_nothing() {
        let log = LogFixture::new().build();
        assert!(run(&log).unwrap().listed_records.is_empty());
    }
}
