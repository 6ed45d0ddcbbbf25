//! Write-time checks for fuel records.
//!
//! The odometer invariant (strictly increasing in chronological order) is
//! only enforced here, when a record is created or edited. Validation looks
//! at the candidate and its two neighbours; it never rescans the whole set.

use crate::model::{FuelRecord, RecordDraft};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{field} must be a positive number")]
    NonPositiveValue { field: &'static str },

    #[error("Odometer {odometer} must be greater than the previous entry ({previous})")]
    OdometerNotIncreasing { odometer: i64, previous: u64 },

    #[error("Odometer {odometer} must be less than the next entry ({next})")]
    OdometerExceedsNext { odometer: i64, next: u64 },
}

/// Checks a candidate against its neighbours' odometer readings.
///
/// `previous` is the odometer of the nearest earlier record (0 when there is
/// none); `next` the nearest later one (`None` stands for +∞).
///
/// The upper bound is checked whenever a later neighbour exists, so it
/// applies to back-dated new entries as well as to edits. A fresh entry
/// dated after every other record has no `next` and only meets the lower
/// bound.
pub fn validate(
    candidate: &RecordDraft,
    previous: u64,
    next: Option<u64>,
) -> Result<(), ValidationError> {
    let (_, liters, odometer) = required_fields(candidate)?;

    if !liters.is_finite() || liters <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field: "liters" });
    }
    if odometer <= 0 {
        return Err(ValidationError::NonPositiveValue { field: "odometer" });
    }
    if let Some(price) = candidate.price {
        // Zero is a legitimate price (legacy and free fill-ups)
        if !price.is_finite() || price < 0.0 {
            return Err(ValidationError::NonPositiveValue { field: "price" });
        }
    }

    if odometer as u64 <= previous {
        return Err(ValidationError::OdometerNotIncreasing { odometer, previous });
    }
    if let Some(next) = next {
        if odometer as u64 >= next {
            return Err(ValidationError::OdometerExceedsNext { odometer, next });
        }
    }

    Ok(())
}

/// Odometer readings bracketing the slot `(date, odometer)` would take in
/// (date, odometer) order, ignoring the record `exclude_id`.
///
/// `records` must be in that order. The previous neighbour is the last
/// record sorting at or before the slot, the next one the first record
/// sorting after it. Same-day records are therefore told apart by odometer,
/// and an existing record with the exact same key counts as previous.
pub fn neighbors(
    records: &[FuelRecord],
    date: NaiveDate,
    odometer: u64,
    exclude_id: Option<&str>,
) -> (u64, Option<u64>) {
    let slot = (date, odometer);
    let others = || {
        records
            .iter()
            .filter(move |r| Some(r.id.as_str()) != exclude_id)
    };

    let previous = others()
        .filter(|r| (r.date, r.odometer) <= slot)
        .last()
        .map(|r| r.odometer)
        .unwrap_or(0);
    let next = others()
        .find(|r| (r.date, r.odometer) > slot)
        .map(|r| r.odometer);

    (previous, next)
}

/// Validates `draft` in the context of `records` and builds the record.
///
/// `id` is the id to assign; on edit it is the existing record's id, which
/// is also excluded from the neighbour lookup.
pub fn build_record(
    records: &[FuelRecord],
    id: String,
    draft: &RecordDraft,
    is_edit: bool,
) -> Result<FuelRecord, ValidationError> {
    let (date, liters, odometer) = required_fields(draft)?;
    let exclude = if is_edit { Some(id.as_str()) } else { None };
    // A negative reading is rejected by `validate`; any slot will do here
    let slot_odometer = u64::try_from(odometer).unwrap_or(0);
    let (previous, next) = neighbors(records, date, slot_odometer, exclude);
    validate(draft, previous, next)?;

    Ok(FuelRecord {
        id,
        date,
        liters,
        odometer: odometer as u64,
        price: draft.price.unwrap_or(0.0),
    })
}

fn required_fields(draft: &RecordDraft) -> Result<(NaiveDate, f64, i64), ValidationError> {
    let date = draft.date.ok_or(ValidationError::MissingField("date"))?;
    let liters = draft.liters.ok_or(ValidationError::MissingField("liters"))?;
    let odometer = draft
        .odometer
        .ok_or(ValidationError::MissingField("odometer"))?;
    Ok((date, liters, odometer))
}
