//! Balance repository for JSON storage
//!
//! Stores checking, savings and the roll-over guard month in accounts.json.
//! Only used when the `persist_balances` setting is on.

use std::path::PathBuf;

use crate::error::GastosError;
use crate::state::BalanceState;

use super::file_io::{read_json_opt, write_json_atomic};

/// Repository for balance persistence
pub struct BalanceRepository {
    path: PathBuf,
}

impl BalanceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load stored balances, `None` if none were ever saved
    pub fn load(&self) -> Result<Option<BalanceState>, GastosError> {
        read_json_opt(&self.path)
    }

    pub fn save(&self, state: &BalanceState) -> Result<(), GastosError> {
        write_json_atomic(&self.path, state)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthKey};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BalanceRepository::new(temp_dir.path().join("accounts.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BalanceRepository::new(temp_dir.path().join("accounts.json"));
        let state = BalanceState {
            checking: Money::from_cents(37_925),
            savings: Money::from_units(7100),
            last_rollover: MonthKey {
                year: 2026,
                month: 11,
            },
        };

        repo.save(&state).unwrap();
        assert_eq!(repo.load().unwrap(), Some(state));

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        assert!(raw.contains("\"checking\": 379.25"));
    }
}
