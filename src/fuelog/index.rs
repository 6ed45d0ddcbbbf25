//! # Display Indexes
//!
//! Record ids are opaque (UUIDs for new records, millisecond timestamps for
//! data imported from older exports) and unpleasant to type. The history
//! listing therefore numbers records 1, 2, 3... newest first, and commands
//! accept either that number or the id.
//!
//! Indexes are recomputed from the current collection on every command, so
//! `fuelog delete 1` always targets the most recent fill-up shown by
//! `fuelog history`.

use crate::model::FuelRecord;
use std::str::FromStr;

/// A user input selecting a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(usize),
    Id(String),
}

impl std::fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSelector::Index(i) => write!(f, "{}", i),
            RecordSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

impl FromStr for RecordSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty record selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(RecordSelector::Index(n)),
            _ => Ok(RecordSelector::Id(s.to_string())),
        }
    }
}

/// A record as shown in the history listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: FuelRecord,
    /// Distance driven since the previous fill-up, if there is one
    pub distance: Option<u64>,
}

/// Numbers `records` (chronological) newest first, starting at 1.
pub fn index_records(records: &[FuelRecord]) -> Vec<DisplayRecord> {
    let mut listed: Vec<DisplayRecord> = records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: 0,
            record: record.clone(),
            distance: i
                .checked_sub(1)
                .and_then(|prev| record.odometer.checked_sub(records[prev].odometer)),
        })
        .collect();

    listed.reverse();
    for (i, dr) in listed.iter_mut().enumerate() {
        dr.index = i + 1;
    }
    listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, date: &str, odometer: u64) -> FuelRecord {
        FuelRecord {
            id: id.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            liters: 40.0,
            odometer,
            price: 0.0,
        }
    }

    #[test]
    fn parses_selectors() {
        assert_eq!("3".parse(), Ok(RecordSelector::Index(3)));
        assert_eq!(
            "abc-123".parse(),
            Ok(RecordSelector::Id("abc-123".to_string()))
        );
        assert_eq!("0".parse(), Ok(RecordSelector::Id("0".to_string())));
        assert!("  ".parse::<RecordSelector>().is_err());
    }

    #[test]
    fn newest_first_with_distances() {
        let records = vec![
            record("a", "2024-01-01", 1000),
            record("b", "2024-02-01", 1500),
            record("c", "2024-03-01", 2100),
        ];
        let listed = index_records(&records);

        let ids: Vec<&str> = listed.iter().map(|d| d.record.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(listed[0].index, 1);
        assert_eq!(listed[0].distance, Some(600));
        assert_eq!(listed[1].distance, Some(500));
        assert_eq!(listed[2].distance, None);
    }

    #[test]
    fn empty_input_lists_nothing() {
        assert!(index_records(&[]).is_empty());
    }
}
