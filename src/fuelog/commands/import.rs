use crate::codec::decode_records;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FuelogError, Result};
use crate::store::{DataStore, FuelLog};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Replaces the whole log with the records in `path`.
///
/// The file is read and fully decoded before the log is touched; any
/// failure leaves the existing records as they were.
pub fn run<S: DataStore>(log: &mut FuelLog<S>, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(|source| FuelogError::ImportRead {
        path: path.to_path_buf(),
        source,
    })?;

    let imported = decode_records(&raw).map_err(|e| {
        warn!(path = %path.display(), "rejected import: {e}");
        FuelogError::ImportFormat(e)
    })?;

    let replaced = log.len();
    let count = imported.len();
    log.commit(move |records| {
        *records = imported;
        Ok(())
    })?;
    info!(path = %path.display(), count, replaced, "imported fuel records");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} records from {} (replaced {})",
        count,
        path.display(),
        replaced
    )));
    Ok(result.with_affected_records(log.records().to_vec()))
}
