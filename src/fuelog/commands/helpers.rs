use crate::error::{FuelogError, Result};
use crate::index::{index_records, DisplayRecord, RecordSelector};
use crate::store::{DataStore, FuelLog};

pub fn indexed_records<S: DataStore>(log: &FuelLog<S>) -> Vec<DisplayRecord> {
    index_records(log.records())
}

/// Resolves selectors against the current listing.
///
/// A number that is out of range for the listing is retried as an id, since
/// records imported from older exports use numeric timestamps as ids.
pub fn resolve_selectors<S: DataStore>(
    log: &FuelLog<S>,
    selectors: &[RecordSelector],
) -> Result<Vec<DisplayRecord>> {
    let indexed = indexed_records(log);

    selectors
        .iter()
        .map(|selector| {
            let found = match selector {
                RecordSelector::Index(n) => indexed
                    .iter()
                    .find(|dr| dr.index == *n)
                    .or_else(|| indexed.iter().find(|dr| dr.record.id == n.to_string())),
                RecordSelector::Id(id) => indexed.iter().find(|dr| &dr.record.id == id),
            };
            found
                .cloned()
                .ok_or_else(|| FuelogError::RecordNotFound(selector.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::LogFixture;

    #[test]
    fn resolves_index_and_id() {
        let log = LogFixture::new().with_monthly_records(3).build();
        let resolved = resolve_selectors(
            &log,
            &[RecordSelector::Index(1), RecordSelector::Id("r1".into())],
        )
        .unwrap();
        assert_eq!(resolved[0].record.id, "r3");
        assert_eq!(resolved[1].record.id, "r1");
    }

    #[test]
    fn numeric_id_falls_back_when_index_out_of_range() {
        let mut log = LogFixture::new().with_monthly_records(1).build();
        log.commit(|records| {
            records[0].id = "1700000".into();
            Ok(())
        })
        .unwrap();

        let resolved = resolve_selectors(&log, &[RecordSelector::Index(1_700_000)]).unwrap();
        assert_eq!(resolved[0].record.id, "1700000");
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let log = LogFixture::new().with_monthly_records(2).build();
        let err = resolve_selectors(&log, &[RecordSelector::Index(5)]).unwrap_err();
        assert!(matches!(err, FuelogError::RecordNotFound(_)));
    }
}
