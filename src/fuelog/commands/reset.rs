use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, FuelLog};
use tracing::info;

/// Removes every record. Confirmation is the caller's job.
pub fn run<S: DataStore>(log: &mut FuelLog<S>) -> Result<CmdResult> {
    let removed = log.commit(|records| {
        let count = records.len();
        records.clear();
        Ok(count)
    })?;
    info!(removed, "reset fuel log");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "All data deleted ({} records).",
        removed
    )));
    Ok(result)
}
