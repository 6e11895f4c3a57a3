//! Expense repository for JSON storage
//!
//! The ledger is stored in expenses.json as a bare JSON array of expense
//! records, newest first. Saving always rewrites the whole array.

use std::path::PathBuf;

use crate::error::GastosError;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the ledger, or an empty one if nothing has been stored yet
    ///
    /// An entry that decodes but is not a valid expense (a non-positive
    /// amount, a missing date) makes the whole file malformed.
    pub fn load(&self) -> Result<Ledger, GastosError> {
        let ledger: Ledger = read_json(&self.path)?;
        for expense in ledger.iter() {
            expense.validate().map_err(|e| {
                GastosError::Storage(format!(
                    "Invalid expense {} in {}: {}",
                    expense.id,
                    self.path.display(),
                    e
                ))
            })?;
        }
        tracing::debug!(entries = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    /// Replace the stored ledger with `ledger`
    pub fn save(&self, ledger: &Ledger) -> Result<(), GastosError> {
        write_json_atomic(&self.path, ledger)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
