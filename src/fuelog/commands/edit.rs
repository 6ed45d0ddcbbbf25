use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FuelogError, Result};
use crate::index::RecordSelector;
use crate::model::RecordDraft;
use crate::store::{DataStore, FuelLog};
use crate::validation::build_record;
use tracing::info;

use super::helpers::resolve_selectors;

/// Replaces the fields set in `changes` on the selected record.
///
/// The record keeps its id; the merged result is validated against the
/// record's neighbours at its (possibly new) date.
pub fn run<S: DataStore>(
    log: &mut FuelLog<S>,
    selector: &RecordSelector,
    changes: &RecordDraft,
) -> Result<CmdResult> {
    let target = resolve_selectors(log, std::slice::from_ref(selector))?
        .into_iter()
        .next()
        .ok_or_else(|| FuelogError::RecordNotFound(selector.to_string()))?;

    if changes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    let id = target.record.id.clone();
    let draft = RecordDraft::from_record(&target.record).merge(changes);

    let updated = log.commit(|records| {
        let updated = build_record(records, id.clone(), &draft, true)?;
        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| FuelogError::RecordNotFound(id.clone()))?;
        *slot = updated.clone();
        Ok(updated)
    })?;
    info!(id = %updated.id, "edited fuel record");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Fill-up updated ({}): {} at {}",
        target.index, updated.date, updated.odometer
    )));
    Ok(result.with_affected_records(vec![updated]))
}
