//! Storage layer for gastos
//!
//! JSON file storage with atomic whole-file writes, plus the audit log.

pub mod balances;
pub mod expenses;
pub mod file_io;

pub use balances::BalanceRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, read_json_opt, write_json_atomic};

use crate::audit::AuditLogger;
use crate::config::paths::GastosPaths;
use crate::error::GastosError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: GastosPaths,
    pub expenses: ExpenseRepository,
    pub balances: BalanceRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: GastosPaths) -> Result<Self, GastosError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            balances: BalanceRepository::new(paths.accounts_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &GastosPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }
}
