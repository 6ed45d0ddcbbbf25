use crate::api::FuelogApi;
use crate::config::FuelogConfig;
use crate::error::{FuelogError, Result};
use crate::store::fs::FileStore;
use crate::store::FuelLog;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "FUELOG_HOME";

pub struct FuelogContext {
    pub api: FuelogApi<FileStore>,
    pub config: FuelogConfig,
}

/// `$FUELOG_HOME` if set and non-empty, else the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "fuelog", "fuelog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FuelogError::Config("Could not determine a data directory".to_string()))
}

/// Loads config and records from `data_dir`.
///
/// A broken config file falls back to defaults; broken records are handled
/// by [`FuelLog::load`].
pub fn initialize(data_dir: &Path) -> FuelogContext {
    let config = FuelogConfig::load(data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config: {e}");
        FuelogConfig::default()
    });
    let log = FuelLog::load(FileStore::new(data_dir));
    let api = FuelogApi::new(log, data_dir.to_path_buf());

    FuelogContext { api, config }
}
