use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::model::FuelRecord;
use crate::store::{DataStore, FuelLog};
use tracing::info;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(log: &mut FuelLog<S>, selectors: &[RecordSelector]) -> Result<CmdResult> {
    // Resolve everything up front: indexes refer to the listing before any removal
    let targets = resolve_selectors(log, selectors)?;
    let ids: Vec<String> = targets.iter().map(|dr| dr.record.id.clone()).collect();

    log.commit(|records| {
        records.retain(|r| !ids.contains(&r.id));
        Ok(())
    })?;
    info!(count = ids.len(), "deleted fuel records");

    let mut result = CmdResult::default();
    let mut removed: Vec<FuelRecord> = Vec::new();
    for target in targets {
        if removed.iter().any(|r| r.id == target.record.id) {
            continue;
        }
        result.add_message(CmdMessage::success(format!(
            "Fill-up deleted ({}): {} at {}",
            target.index, target.record.date, target.record.odometer
        )));
        removed.push(target.record);
    }
    Ok(result.with_affected_records(removed))
}
