//! # Report Engine
//!
//! Derives per-fill-up distance, consumption and cost from a sequence of
//! odometer readings.
//!
//! ## Interval Convention
//!
//! Consumption is measured at refill time: the fuel bought at fill-up `i`
//! is what was burned driving from fill-up `i-1` to fill-up `i`. Each
//! interval therefore carries the liters, price and date of the record that
//! *ends* it. The first record in a range only provides the starting
//! odometer reading.
//!
//! ```text
//!   odo 1000 ──────── 1500 ──────── 2100
//!   (start)        45 L, 500 km   50 L, 600 km
//! ```
//!
//! ## Degenerate Input
//!
//! The engine never fails. Fewer than two records in range, or pairs with a
//! non-positive distance, simply contribute nothing; all ratios fall back to
//! zero when their denominator is zero.

use crate::model::FuelRecord;
use chrono::NaiveDate;
use serde::Serialize;

pub mod filter;

pub use filter::{available_months, DateRange, ReportFilter, YearMonth};

/// One fill-up-to-fill-up leg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    /// Date of the fill-up that closes the interval
    pub date: NaiveDate,
    pub distance: u64,
    pub liters: f64,
    pub cost: f64,
    /// Liters per 100 distance units
    pub consumption_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportResult {
    pub intervals: Vec<Interval>,
    pub total_distance: u64,
    pub total_liters: f64,
    pub total_cost: f64,
    pub overall_consumption: f64,
    pub avg_price_per_liter: f64,
    pub avg_cost_per_distance: f64,
}

/// A point of the consumption trend, one per interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub consumption_rate: f64,
}

impl ReportResult {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn trend(&self) -> Vec<TrendPoint> {
        self.intervals
            .iter()
            .map(|interval| TrendPoint {
                label: interval.date.format("%b %-d").to_string(),
                consumption_rate: (interval.consumption_rate * 100.0).round() / 100.0,
            })
            .collect()
    }
}

/// Builds a report over the records dated within `[start, end]`.
pub fn build_report(records: &[FuelRecord], start: NaiveDate, end: NaiveDate) -> ReportResult {
    let mut in_range: Vec<&FuelRecord> = records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .collect();

    if in_range.len() < 2 {
        return ReportResult::default();
    }

    // Stable, so equal readings keep their input order
    in_range.sort_by_key(|r| r.odometer);

    let intervals: Vec<Interval> = in_range
        .windows(2)
        .filter_map(|pair| {
            let (prev, curr) = (pair[0], pair[1]);
            let distance = curr.odometer.checked_sub(prev.odometer)?;
            if distance == 0 {
                return None;
            }
            Some(Interval {
                date: curr.date,
                distance,
                liters: curr.liters,
                cost: curr.price,
                consumption_rate: curr.liters / distance as f64 * 100.0,
            })
        })
        .collect();

    let first = in_range[0].odometer;
    let last = in_range[in_range.len() - 1].odometer;
    let total_distance = last.saturating_sub(first);
    let total_liters: f64 = intervals.iter().map(|i| i.liters).sum();
    let total_cost: f64 = intervals.iter().map(|i| i.cost).sum();

    let per_distance = |value: f64| {
        if total_distance > 0 {
            value / total_distance as f64
        } else {
            0.0
        }
    };

    ReportResult {
        overall_consumption: per_distance(total_liters) * 100.0,
        avg_price_per_liter: if total_liters > 0.0 {
            total_cost / total_liters
        } else {
            0.0
        },
        avg_cost_per_distance: per_distance(total_cost),
        intervals,
        total_distance,
        total_liters,
        total_cost,
    }
}
