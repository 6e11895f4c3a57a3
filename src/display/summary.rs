//! Status report formatting
//!
//! The four summary figures (checking, savings, total expenses, projected
//! savings against the goal) plus a per-category breakdown.

use crate::config::Settings;
use crate::services::TrackerSummary;

/// Format the status report
pub fn format_summary(summary: &TrackerSummary, settings: &Settings) -> String {
    let money = |amount| settings.format_money(amount);
    let mut output = String::new();

    output.push_str(&format!("Checking:          {:>12}\n", money(summary.checking)));
    output.push_str(&format!("Savings:           {:>12}\n", money(summary.savings)));
    output.push_str(&format!(
        "Total expenses:    {:>12}  ({} {})\n",
        money(summary.total_expenses),
        summary.expense_count,
        if summary.expense_count == 1 { "entry" } else { "entries" }
    ));
    output.push_str(&format!(
        "Projected savings: {:>12} / {} ({}%)\n",
        money(summary.projected_savings),
        money(summary.savings_goal),
        summary.goal_percent()
    ));

    if !summary.by_category.is_empty() {
        output.push('\n');
        output.push_str("By category:\n");
        for (category, total) in &summary.by_category {
            output.push_str(&format!("  {:<10} {:>12}\n", category.to_string(), money(*total)));
        }
    }

    output.push('\n');
    output.push_str(&format!("Last roll-over month: {}\n", summary.last_rollover));
    if !summary.balances_persisted {
        output.push_str(
            "Note: balances are not saved between sessions (set persist_balances in config.json)\n",
        );
    }

    output
}

/// Describe the outcome of a roll-over tick
pub fn format_tick_result(applied: u32, summary: &TrackerSummary, settings: &Settings) -> String {
    if applied == 0 {
        return format!(
            "No roll-over due (last applied: {}).\n",
            summary.last_rollover
        );
    }

    format!(
        "Applied {} monthly roll-over{}.\nChecking: {}\nSavings:  {}\n",
        applied,
        if applied == 1 { "" } else { "s" },
        settings.format_money(summary.checking),
        settings.format_money(summary.savings)
    )
}
