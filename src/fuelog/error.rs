use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::codec::ImportError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum FuelogError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid import file: {0}")]
    ImportFormat(#[from] ImportError),

    #[error("Could not read import file {path}: {source}")]
    ImportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read stored records: {0}")]
    StorageRead(String),

    #[error("Could not save records: {0}")]
    StorageWrite(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FuelogError>;
