//! JSON Export functionality
//!
//! Exports the ledger together with the session's balances, with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{GastosError, GastosResult};
use crate::models::{Expense, Money};
use crate::services::Tracker;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub checking: Money,

    pub savings: Money,

    pub total_expenses: Money,

    pub savings_goal: Money,

    /// All expenses, newest first
    pub expenses: Vec<Expense>,
}

impl FullExport {
    /// Snapshot the tracker's current state
    pub fn from_tracker(tracker: &Tracker<'_>) -> Self {
        let summary = tracker.summary();
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            checking: summary.checking,
            savings: summary.savings,
            total_expenses: summary.total_expenses,
            savings_goal: summary.savings_goal,
            expenses: tracker.ledger().entries().to_vec(),
        }
    }

}

/// Export everything to JSON
pub fn export_full_json<W: Write>(
    tracker: &Tracker<'_>,
    writer: &mut W,
    pretty: bool,
) -> GastosResult<()> {
    let export = FullExport::from_tracker(tracker);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| GastosError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| GastosError::Export(e.to_string()))?;
    Ok(())
}
