//! Export module for gastos
//!
//! - CSV: the expense list (spreadsheet-compatible)
//! - JSON: expenses plus balances, machine-readable
//! - YAML: the same content, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{GastosPaths, Settings};
    use crate::models::{ExpenseCategory, Money};
    use crate::services::Tracker;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn with_tracker(check: impl FnOnce(&Tracker<'_>)) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(GastosPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let mut tracker = Tracker::open(&storage, &settings, &clock).unwrap();
        tracker.add("50", ExpenseCategory::Fuel).unwrap();
        tracker.add("9.95", ExpenseCategory::Leisure).unwrap();
        check(&tracker);
    }

    #[test]
    fn test_csv_export() {
        with_tracker(|tracker| {
            let mut out = Vec::new();
            export_expenses_csv(tracker.ledger().entries(), &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            let lines: Vec<&str> = text.lines().collect();

            assert_eq!(lines[0], "id,date,category,amount");
            assert!(lines[1].ends_with(",18/10/2026,Leisure,9.95"));
            assert!(lines[2].ends_with(",18/10/2026,Fuel,50.00"));
            assert_eq!(lines.len(), 3);
        });
    }

    #[test]
    fn test_csv_export_empty_has_header() {
        let mut out = Vec::new();
        export_expenses_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "id,date,category,amount\n");
    }

    #[test]
    fn test_json_export() {
        with_tracker(|tracker| {
            let mut out = Vec::new();
            export_full_json(tracker, &mut out, true).unwrap();
            let export: FullExport = serde_json::from_slice(&out).unwrap();

            assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
            assert_eq!(export.expenses.len(), 2);
            assert_eq!(export.total_expenses, Money::from_cents(5995));
            assert_eq!(export.checking, Money::from_cents(41_500 - 5995));
            let sum: Money = export.expenses.iter().map(|e| e.amount).sum();
            assert_eq!(sum, export.total_expenses);
        });
    }

    #[test]
    fn test_yaml_round_trip() {
        with_tracker(|tracker| {
            let mut out = Vec::new();
            export_full_yaml(tracker, &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            assert!(text.starts_with("# gastos export"));

            let export: FullExport = serde_yaml::from_str(&text).unwrap();
            assert_eq!(export.expenses, tracker.ledger().entries().to_vec());
        });
    }
}
