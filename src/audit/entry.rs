//! Audit log entries
//!
//! One entry per change to the tracker: an expense recorded, an expense
//! removed, or a batch of roll-overs applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AccountPair, Expense, Money, MonthKey};

/// A change to the tracker, with the figures needed to replay it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditEvent {
    ExpenseAdded {
        expense: Expense,
        checking_after: Money,
    },
    ExpenseRemoved {
        expense: Expense,
        checking_after: Money,
    },
    RolloverApplied {
        /// Month the guard moved to
        month: MonthKey,
        /// Number of monthly roll-overs credited at once
        applied: u32,
        before: AccountPair,
        after: AccountPair,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub event: AuditEvent,
}

impl AuditEntry {
    /// Stamp an event with a clock reading in milliseconds
    pub fn at_millis(millis: u64, event: AuditEvent) -> Self {
        let timestamp = i64::try_from(millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_else(Utc::now);
        Self { timestamp, event }
    }
}
