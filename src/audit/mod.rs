//! Audit trail for gastos
//!
//! Every expense added or removed and every roll-over applied is appended to
//! `audit.log`, so balances can be explained after the fact even when they
//! are not persisted between sessions.

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;
