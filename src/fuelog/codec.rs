//! JSON backup format.
//!
//! Export is plain serde serialization of the record list. Import goes
//! through a strict decoder instead of `serde_json::from_str::<Vec<_>>` so a
//! rejected document reports *which* element and field is wrong. Decoding
//! stops at the first violation and nothing is returned on failure: an
//! import is all or nothing.

use crate::model::{sort_records, FuelRecord};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("not valid JSON: {0}")]
    Malformed(String),

    #[error("expected a JSON array of records")]
    NotAnArray,

    #[error("element {index} is not an object")]
    NotAnObject { index: usize },

    #[error("element {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("element {index}: `{field}` must be a {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("element {index}: `{value}` is not a valid date (YYYY-MM-DD)")]
    InvalidDate { index: usize, value: String },

    #[error("element {index}: duplicate id `{id}`")]
    DuplicateId { index: usize, id: String },
}

/// Serializes records as a pretty-printed JSON array.
pub fn encode_records(records: &[FuelRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Decodes an exported document, returning records in chronological order.
pub fn decode_records(input: &str) -> Result<Vec<FuelRecord>, ImportError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| ImportError::Malformed(e.to_string()))?;
    let elements = value.as_array().ok_or(ImportError::NotAnArray)?;

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let record = decode_record(index, element)?;
        if !seen.insert(record.id.clone()) {
            return Err(ImportError::DuplicateId {
                index,
                id: record.id,
            });
        }
        records.push(record);
    }

    sort_records(&mut records);
    Ok(records)
}

/// File name for an export made on `today`.
pub fn export_filename(today: NaiveDate) -> String {
    format!("fuelog-export-{}.json", today.format("%Y-%m-%d"))
}

fn decode_record(index: usize, element: &Value) -> Result<FuelRecord, ImportError> {
    let obj = element
        .as_object()
        .ok_or(ImportError::NotAnObject { index })?;

    let id = field(obj, index, "id")?
        .as_str()
        .ok_or(ImportError::WrongType {
            index,
            field: "id",
            expected: "string",
        })?
        .to_string();

    let raw_date = field(obj, index, "date")?
        .as_str()
        .ok_or(ImportError::WrongType {
            index,
            field: "date",
            expected: "string",
        })?;
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
        ImportError::InvalidDate {
            index,
            value: raw_date.to_string(),
        }
    })?;

    let liters = field(obj, index, "liters")?
        .as_f64()
        .ok_or(ImportError::WrongType {
            index,
            field: "liters",
            expected: "number",
        })?;

    let odometer = as_whole_number(field(obj, index, "odometer")?).ok_or(ImportError::WrongType {
        index,
        field: "odometer",
        expected: "non-negative integer",
    })?;

    let price = match obj.get("price") {
        None | Some(Value::Null) => 0.0,
        Some(value) => value.as_f64().ok_or(ImportError::WrongType {
            index,
            field: "price",
            expected: "number",
        })?,
    };

    Ok(FuelRecord {
        id,
        date,
        liters,
        odometer,
        price,
    })
}

fn field<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    name: &'static str,
) -> Result<&'a Value, ImportError> {
    obj.get(name)
        .ok_or(ImportError::MissingField { index, field: name })
}

// Older exports may carry the reading as a float like `1500.0`
fn as_whole_number(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}
