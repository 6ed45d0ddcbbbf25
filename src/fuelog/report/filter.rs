use crate::error::{FuelogError, Result};
use crate::model::FuelRecord;
use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Inclusive date range a report is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A calendar month, e.g. `2024-02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        // Day 1 always exists
        YearMonth(date.with_day(1).unwrap_or(date))
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || format!("Invalid month (expected YYYY-MM): {}", s);
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(YearMonth)
            .ok_or_else(invalid)
    }
}

/// How the user picked the report window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFilter {
    /// Explicit pair, used verbatim
    Range { start: NaiveDate, end: NaiveDate },
    /// A whole calendar month
    Month(YearMonth),
    /// The last `days` days up to and including today
    Trailing { days: u64 },
}

impl ReportFilter {
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange> {
        match *self {
            ReportFilter::Range { start, end } => {
                if start > end {
                    return Err(FuelogError::InvalidDateRange { start, end });
                }
                Ok(DateRange { start, end })
            }
            ReportFilter::Month(month) => Ok(DateRange {
                start: month.first_day(),
                end: month.last_day(),
            }),
            ReportFilter::Trailing { days } => Ok(DateRange {
                start: today
                    .checked_sub_days(Days::new(days))
                    .unwrap_or(NaiveDate::MIN),
                end: today,
            }),
        }
    }
}

/// Distinct months that have at least one record, most recent first.
pub fn available_months(records: &[FuelRecord]) -> Vec<YearMonth> {
    records
        .iter()
        .map(|r| YearMonth::of(r.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}
