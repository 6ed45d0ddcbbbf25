//! # CLI Layer
//!
//! This module is **one possible UI client** for fuelog. It is the only place
//! that touches stdout, stderr and stdin, parses arguments or installs the
//! log subscriber.
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: resolves the data directory and loads config and records
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::render::{
    print_messages, render_config, render_history, render_months, render_record_line,
    render_report,
};
use super::setup::{print_grouped_help, Cli, Commands};
use clap::Parser;
use fuelog::api::{CmdResult, ConfigAction, FuelogApi};
use fuelog::config::FuelogConfig;
use fuelog::error::Result;
use fuelog::init::{data_dir, initialize};
use fuelog::model::RecordDraft;
use fuelog::report::ReportFilter;
use fuelog::store::fs::FileStore;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "FUELOG_LOG";

struct AppContext {
    api: FuelogApi<FileStore>,
    config: FuelogConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.help {
        print_grouped_help();
        return Ok(());
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            liters,
            odometer,
            date,
            price,
        }) => {
            let draft = RecordDraft {
                date: date.or(Some(ctx.api.today())),
                liters,
                odometer,
                price,
            };
            handle_add(&mut ctx, draft)
        }
        Some(Commands::History) => handle_history(&mut ctx),
        Some(Commands::Edit {
            selector,
            date,
            liters,
            odometer,
            price,
        }) => {
            let changes = RecordDraft {
                date,
                liters,
                odometer,
                price,
            };
            handle_edit(&mut ctx, &selector, changes)
        }
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Report {
            from,
            to,
            month,
            days,
        }) => {
            let filter = match (from, to, month, days) {
                (Some(start), Some(end), _, _) => ReportFilter::Range { start, end },
                (_, _, Some(month), _) => ReportFilter::Month(month),
                (_, _, _, Some(days)) => ReportFilter::Trailing { days },
                _ => ReportFilter::Trailing {
                    days: ctx.config.default_period_days,
                },
            };
            handle_report(&mut ctx, filter)
        }
        Some(Commands::Months) => handle_months(&mut ctx),
        Some(Commands::Export { dir }) => handle_export(&mut ctx, dir),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_history(&mut ctx),
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    debug!(dir = %dir.display(), "using data directory");
    let ctx = initialize(&dir);

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn handle_add(ctx: &mut AppContext, draft: RecordDraft) -> Result<()> {
    let result = ctx.api.add_record(&draft)?;
    print_affected(&result, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.history()?;
    print!(
        "{}",
        render_history(&result.listed_records, &ctx.config, ctx.api.today())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: &str, changes: RecordDraft) -> Result<()> {
    let result = ctx.api.edit_record(selector, &changes)?;
    print_affected(&result, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if !yes
        && !confirm(&format!(
            "Delete {} fill-up(s) ({})?",
            selectors.len(),
            selectors.join(", ")
        ))?
    {
        println!("Aborted.");
        return Ok(());
    }

    let result = ctx.api.delete_records(&selectors)?;
    print_affected(&result, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &mut AppContext, filter: ReportFilter) -> Result<()> {
    let result = ctx.api.report(&filter)?;
    if let Some(outcome) = &result.report {
        print!("{}", render_report(outcome, &ctx.config));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_months(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.months()?;
    print!("{}", render_months(&result.months));
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export(&dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes && !confirm("Delete ALL fill-ups? This cannot be undone.")? {
        println!("Aborted.");
        return Ok(());
    }

    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_affected(result: &CmdResult, config: &FuelogConfig) {
    for record in &result.affected_records {
        print!("{}", render_record_line(record, config));
    }
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
