use crate::codec::{encode_records, export_filename};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FuelogError, Result};
use crate::store::{DataStore, FuelLog};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes every record to `fuelog-export-<today>.json` inside `dir`.
pub fn run<S: DataStore>(log: &FuelLog<S>, dir: &Path, today: NaiveDate) -> Result<CmdResult> {
    let json = encode_records(log.records())?;

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(FuelogError::Io)?;
    }
    let path = dir.join(export_filename(today));
    fs::write(&path, json).map_err(FuelogError::Io)?;
    info!(path = %path.display(), count = log.len(), "exported fuel records");

    let mut result = CmdResult::default();
    if log.is_empty() {
        result.add_message(CmdMessage::warning("No records yet; exported an empty list."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} records to {}",
        log.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}
