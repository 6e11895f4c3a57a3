//! Audit history formatting

use crate::audit::{AuditEntry, AuditEvent};
use crate::config::Settings;

/// One history line per audit entry, oldest first
pub fn format_history(entries: &[AuditEntry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No history yet.\n".to_string();
    }

    let money = |amount| settings.format_money(amount);
    let mut output = String::new();

    for entry in entries {
        let when = entry.timestamp.format("%Y-%m-%d %H:%M");
        let line = match &entry.event {
            AuditEvent::ExpenseAdded {
                expense,
                checking_after,
            } => format!(
                "{}  added    {} {} {} ({}), checking {}",
                when,
                expense.id,
                money(expense.amount),
                expense.category,
                expense.date,
                money(*checking_after)
            ),
            AuditEvent::ExpenseRemoved {
                expense,
                checking_after,
            } => format!(
                "{}  removed  {} {} {} ({}), checking {}",
                when,
                expense.id,
                money(expense.amount),
                expense.category,
                expense.date,
                money(*checking_after)
            ),
            AuditEvent::RolloverApplied {
                month,
                applied,
                before,
                after,
            } => format!(
                "{}  roll-over to {} (x{}): checking {} -> {}, savings {} -> {}",
                when,
                month,
                applied,
                money(before.checking),
                money(after.checking),
                money(before.savings),
                money(after.savings)
            ),
        };
        output.push_str(&line);
        output.push('\n');
    }

    output
}
