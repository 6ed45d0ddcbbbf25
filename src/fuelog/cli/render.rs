//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function
//! returns a `String` so layout can be tested without a terminal; the
//! `print_*` wrappers write to stdout.
//!
//! Column math uses display width, not byte length, because the currency
//! label is user-configurable and may be non-ASCII.

use chrono::NaiveDate;
use colored::Colorize;
use fuelog::api::{CmdMessage, MessageLevel, ReportOutcome, ReportState};
use fuelog::config::FuelogConfig;
use fuelog::index::DisplayRecord;
use fuelog::model::FuelRecord;
use fuelog::report::YearMonth;
use std::time::Duration;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const TIME_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;
const BAR_CHAR: &str = "█";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The history table, one line per fill-up, newest first.
pub(super) fn render_history(
    records: &[DisplayRecord],
    config: &FuelogConfig,
    today: NaiveDate,
) -> String {
    if records.is_empty() {
        return "No fill-ups recorded yet.\n".to_string();
    }

    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|dr| {
            let [date, odometer, liters, price] = record_columns(&dr.record, config);
            let distance = dr
                .distance
                .map(|d| format!("+{} {}", d, config.distance_unit))
                .unwrap_or_default();
            [format!("{}.", dr.index), date, odometer, liters, price, distance]
        })
        .collect();

    let widths = column_widths(&rows);
    let mut out = String::new();
    for (dr, row) in records.iter().zip(&rows) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad_left(cell, *width))
            .collect();
        let time_ago = format!(
            "{:>width$}",
            format_time_ago(dr.record.date, today),
            width = TIME_WIDTH
        );
        out.push_str(&format!(
            "  {}  {}  {}  {}  {}  {}  {}\n",
            cells[0].yellow(),
            cells[1],
            cells[2],
            cells[3],
            cells[4],
            cells[5].cyan(),
            time_ago.dimmed()
        ));
    }
    out
}

/// A single record on one line, used after add/edit/delete.
pub(super) fn render_record_line(record: &FuelRecord, config: &FuelogConfig) -> String {
    let [date, odometer, liters, price] = record_columns(record, config);
    format!(
        "  {}  {}  {}  {}  {}\n",
        record.short_id().dimmed(),
        date,
        odometer,
        liters,
        price
    )
}

pub(super) fn render_report(outcome: &ReportOutcome, config: &FuelogConfig) -> String {
    let mut out = format!(
        "{} {} to {}\n",
        "Fuel report".bold(),
        outcome.range.start,
        outcome.range.end
    );
    if outcome.state != ReportState::Ready {
        return out;
    }

    let report = &outcome.report;
    let unit = &config.distance_unit;
    let currency = &config.currency;
    let summary = [
        ("Distance", format!("{} {}", report.total_distance, unit)),
        ("Fuel", format!("{:.2} L", report.total_liters)),
        ("Cost", format!("{} {}", format_amount(report.total_cost), currency)),
        (
            "Consumption",
            format!("{:.2} L/100 {}", report.overall_consumption, unit),
        ),
        (
            "Price per liter",
            format!("{:.2} {}", report.avg_price_per_liter, currency),
        ),
        (
            "Cost per distance",
            format!("{:.2} {}/{}", report.avg_cost_per_distance, currency, unit),
        ),
    ];
    let label_width = summary.iter().map(|(l, _)| l.width()).max().unwrap_or(0);

    out.push('\n');
    for (label, value) in &summary {
        out.push_str(&format!("  {:<w$}  {}\n", label, value, w = label_width));
    }

    out.push_str(&format!("\n{}\n", "Intervals".bold()));
    let rows: Vec<[String; 5]> = report
        .intervals
        .iter()
        .map(|iv| {
            [
                iv.date.to_string(),
                format!("{} {}", iv.distance, unit),
                format!("{:.2} L", iv.liters),
                format!("{:.2} L/100 {}", iv.consumption_rate, unit),
                format!("{} {}", format_amount(iv.cost), currency),
            ]
        })
        .collect();
    let widths = column_widths(&rows);
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad_left(cell, *width))
            .collect();
        out.push_str(&format!("  {}\n", cells.join("  ")));
    }

    out.push_str(&format!("\n{} (L/100 {})\n", "Trend".bold(), unit));
    let trend = report.trend();
    let max_rate = trend
        .iter()
        .map(|p| p.consumption_rate)
        .fold(0.0_f64, f64::max);
    let label_width = trend.iter().map(|p| p.label.width()).max().unwrap_or(0);
    for point in &trend {
        out.push_str(&format!(
            "  {:<w$}  {} {:.2}\n",
            point.label,
            bar(point.consumption_rate, max_rate).green(),
            point.consumption_rate,
            w = label_width
        ));
    }
    out
}

pub(super) fn render_months(months: &[YearMonth]) -> String {
    months.iter().map(|m| format!("  {}\n", m)).collect()
}

pub(super) fn render_config(config: &FuelogConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}

fn record_columns(record: &FuelRecord, config: &FuelogConfig) -> [String; 4] {
    let price = if record.price > 0.0 {
        format!("{} {}", format_amount(record.price), config.currency)
    } else {
        "-".to_string()
    };
    [
        record.date.to_string(),
        format!("{} {}", record.odometer, config.distance_unit),
        format!("{:.2} L", record.liters),
        price,
    ]
}

fn column_widths<const N: usize>(rows: &[[String; N]]) -> [usize; N] {
    let mut widths = [0; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

/// Whole amounts print without decimals.
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    BAR_CHAR.repeat(len.max(1))
}

fn format_time_ago(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        d if d < 0 => "upcoming".to_string(),
        0 => "today".to_string(),
        d => Formatter::new().convert(Duration::from_secs(d as u64 * 86_400)),
    }
}
