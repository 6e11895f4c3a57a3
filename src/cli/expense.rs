//! Expense and balance CLI commands
//!
//! The commands that operate on an open tracker session. They are shared by
//! the one-shot command line and the interactive session.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::display::{format_expense_list, format_history, format_summary, format_tick_result};
use crate::error::{GastosError, GastosResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::models::{ExpenseCategory, ExpenseId};
use crate::services::{ExpenseFilter, Tracker};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (expenses and balances)
    Json,
    /// YAML format (expenses and balances, human-readable)
    Yaml,
}

/// Commands that run against the tracker
#[derive(Subcommand, Debug)]
pub enum TrackerCommand {
    /// Record an expense paid from checking
    Add {
        /// Amount (e.g. "12.50" or "12,50"); invalid amounts are ignored
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (fuel, clothing, leisure, other)
        #[arg(short, long, default_value = "fuel")]
        category: ExpenseCategory,
    },
    /// Remove an expense and refund its amount to checking
    #[command(alias = "rm")]
    Remove {
        /// Expense ID as shown by `list`
        id: ExpenseId,
    },
    /// List recorded expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only show one category
        #[arg(short, long)]
        category: Option<ExpenseCategory>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show balances, total expenses and savings progress
    Status,
    /// Evaluate the monthly roll-over now
    Tick,
    /// Export expenses and balances to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a tracker command, writing user-facing output to `out`
pub fn handle_tracker_command<W: Write>(
    tracker: &mut Tracker<'_>,
    cmd: TrackerCommand,
    out: &mut W,
) -> GastosResult<()> {
    match cmd {
        TrackerCommand::Add { amount, category } => {
            // Invalid input is dropped without a message
            if let Some(expense) = tracker.add(&amount, category)? {
                let settings = tracker.settings();
                writeln!(
                    out,
                    "Added expense {}: {} {} ({})",
                    expense.id,
                    settings.format_money(expense.amount),
                    expense.category,
                    expense.date
                )?;
                writeln!(out, "  Checking: {}", settings.format_money(tracker.accounts().checking))?;
            }
        }

        TrackerCommand::Remove { id } => {
            if let Some(removed) = tracker.remove(id)? {
                let settings = tracker.settings();
                writeln!(
                    out,
                    "Removed expense {}: {} {}",
                    removed.id,
                    settings.format_money(removed.amount),
                    removed.category
                )?;
                writeln!(out, "  Checking: {}", settings.format_money(tracker.accounts().checking))?;
            }
        }

        TrackerCommand::List { category, limit } => {
            let filter = ExpenseFilter {
                category,
                limit,
            };
            let expenses = tracker.list(&filter);
            write!(out, "{}", format_expense_list(&expenses, tracker.settings()))?;
        }

        TrackerCommand::Status => {
            write!(out, "{}", format_summary(&tracker.summary(), tracker.settings()))?;
        }

        TrackerCommand::Tick => {
            let applied = tracker.tick()?;
            write!(
                out,
                "{}",
                format_tick_result(applied, &tracker.summary(), tracker.settings())
            )?;
        }

        TrackerCommand::Export {
            output,
            format,
            pretty,
        } => {
            let file = File::create(&output).map_err(|e| {
                GastosError::Export(format!("Failed to create {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);

            match format {
                ExportFormat::Csv => export_expenses_csv(tracker.ledger().entries(), &mut writer)?,
                ExportFormat::Json => export_full_json(tracker, &mut writer, pretty)?,
                ExportFormat::Yaml => export_full_yaml(tracker, &mut writer)?,
            }
            writer
                .flush()
                .map_err(|e| GastosError::Export(e.to_string()))?;

            writeln!(
                out,
                "Exported {} expenses to {}",
                tracker.ledger().len(),
                output.display()
            )?;
        }

        TrackerCommand::History { limit } => {
            let entries = tracker.storage().audit().recent(limit)?;
            write!(out, "{}", format_history(&entries, tracker.settings()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{GastosPaths, Settings};
    use crate::models::Money;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn run(tracker: &mut Tracker<'_>, cmd: TrackerCommand) -> String {
        let mut out = Vec::new();
        handle_tracker_command(tracker, cmd, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_list_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(GastosPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let mut tracker = Tracker::open(&storage, &settings, &clock).unwrap();

        let added = run(
            &mut tracker,
            TrackerCommand::Add {
                amount: "50".into(),
                category: ExpenseCategory::Fuel,
            },
        );
        assert!(added.contains("€50.00 Fuel (18/10/2026)"));
        assert!(added.contains("Checking: €365.00"));

        let ignored = run(
            &mut tracker,
            TrackerCommand::Add {
                amount: "abc".into(),
                category: ExpenseCategory::Fuel,
            },
        );
        assert!(ignored.is_empty());

        let listed = run(
            &mut tracker,
            TrackerCommand::List {
                category: None,
                limit: None,
            },
        );
        assert!(listed.contains("Fuel"));

        let id = tracker.ledger().entries()[0].id;
        let removed = run(&mut tracker, TrackerCommand::Remove { id });
        assert!(removed.contains("Checking: €415.00"));
        assert_eq!(tracker.accounts().checking, Money::from_units(415));

        let again = run(&mut tracker, TrackerCommand::Remove { id });
        assert!(again.is_empty());

        let history = run(&mut tracker, TrackerCommand::History { limit: 10 });
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("added"));
        assert!(lines[1].contains("removed"));
        assert!(lines[1].contains(&id.to_string()));
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(GastosPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let mut tracker = Tracker::open(&storage, &settings, &clock).unwrap();
        tracker.add("20", ExpenseCategory::Clothing).unwrap();

        let output = temp_dir.path().join("out.csv");
        let message = run(
            &mut tracker,
            TrackerCommand::Export {
                output: output.clone(),
                format: ExportFormat::Csv,
                pretty: false,
            },
        );
        assert!(message.starts_with("Exported 1 expenses"));

        let csv = std::fs::read_to_string(output).unwrap();
        assert!(csv.contains("Clothing,20.00"));
    }
}
