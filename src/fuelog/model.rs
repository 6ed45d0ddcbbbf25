use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// One fill-up event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    pub id: String,
    pub date: NaiveDate,
    pub liters: f64,
    pub odometer: u64,
    // Records written before prices were tracked have no price field
    #[serde(default)]
    pub price: f64,
}

impl FuelRecord {
    pub fn new(date: NaiveDate, liters: f64, odometer: u64, price: f64) -> Self {
        Self {
            id: new_record_id(),
            date,
            liters,
            odometer,
            price,
        }
    }

    /// Short form of the id for display (first 8 chars).
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((end, _)) => &self.id[..end],
            None => &self.id,
        }
    }
}

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Canonical chronological order: date, then odometer.
pub fn chronological(a: &FuelRecord, b: &FuelRecord) -> Ordering {
    a.date.cmp(&b.date).then(a.odometer.cmp(&b.odometer))
}

pub fn sort_records(records: &mut [FuelRecord]) {
    records.sort_by(chronological);
}

/// A record as entered by the user, before validation.
///
/// Every field is optional so a missing value can be reported instead of
/// being rejected at parse time. Odometer is signed for the same reason:
/// a negative reading is a validation failure, not a type error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    pub date: Option<NaiveDate>,
    pub liters: Option<f64>,
    pub odometer: Option<i64>,
    pub price: Option<f64>,
}

impl RecordDraft {
    pub fn new(date: NaiveDate, liters: f64, odometer: i64) -> Self {
        Self {
            date: Some(date),
            liters: Some(liters),
            odometer: Some(odometer),
            price: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Draft pre-filled from an existing record, the starting point of an edit.
    pub fn from_record(record: &FuelRecord) -> Self {
        Self {
            date: Some(record.date),
            liters: Some(record.liters),
            odometer: i64::try_from(record.odometer).ok(),
            price: Some(record.price),
        }
    }

    /// Overlays the fields set in `changes` onto this draft.
    pub fn merge(mut self, changes: &RecordDraft) -> Self {
        if changes.date.is_some() {
            self.date = changes.date;
        }
        if changes.liters.is_some() {
            self.liters = changes.liters;
        }
        if changes.odometer.is_some() {
            self.odometer = changes.odometer;
        }
        if changes.price.is_some() {
            self.price = changes.price;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &RecordDraft::default()
    }
}
