use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{new_record_id, RecordDraft};
use crate::store::{DataStore, FuelLog};
use crate::validation::build_record;
use tracing::info;

pub fn run<S: DataStore>(log: &mut FuelLog<S>, draft: &RecordDraft) -> Result<CmdResult> {
    let record = log.commit(|records| {
        let record = build_record(records, new_record_id(), draft, false)?;
        records.push(record.clone());
        Ok(record)
    })?;
    info!(id = %record.id, odometer = record.odometer, "added fuel record");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Fill-up added: {} at {}",
        record.date, record.odometer
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuelogError;
    use crate::store::memory::fixtures::LogFixture;
    use crate::store::memory::InMemoryStore;
    use crate::validation::ValidationError;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn adds_first_record() {
        let mut log = FuelLog::load(InMemoryStore::new());
        let draft = RecordDraft::new(date("2024-01-01"), 40.0, 1000).with_price(800_000.0);
        let result = run(&mut log, &draft).unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(result.affected_records[0].price, 800_000.0);
        assert!(!result.affected_records[0].id.is_empty());
    }

    #[test]
    fn rejects_odometer_not_above_last_entry() {
        let mut log = LogFixture::new().with_monthly_records(2).build();
        let draft = RecordDraft::new(date("2024-03-01"), 40.0, 1500);

        let err = run(&mut log, &draft).unwrap_err();
        assert!(matches!(
            err,
            FuelogError::Validation(ValidationError::OdometerNotIncreasing { previous: 1500, .. })
        ));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn backdated_entry_must_fit_between_neighbors() {
        let mut log = LogFixture::new().with_monthly_records(3).build();

        let too_high = RecordDraft::new(date("2024-01-15"), 30.0, 1600);
        assert!(matches!(
            run(&mut log, &too_high),
            Err(FuelogError::Validation(
                ValidationError::OdometerExceedsNext { next: 1500, .. }
            ))
        ));

        let fits = RecordDraft::new(date("2024-01-15"), 30.0, 1200);
        run(&mut log, &fits).unwrap();
        let odometers: Vec<u64> = log.records().iter().map(|r| r.odometer).collect();
        assert_eq!(odometers, vec![1000, 1200, 1500, 2000]);
    }

    #[test]
    fn missing_liters_is_reported() {
        let mut log = FuelLog::load(InMemoryStore::new());
        let draft = RecordDraft {
            date: Some(date("2024-01-01")),
            odometer: Some(1000),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut log, &draft),
            Err(FuelogError::Validation(ValidationError::MissingField("liters")))
        ));
        assert!(log.is_empty());
    }
}
