//! Expense display formatting
//!
//! Formats the expense history for terminal output.

use crate::config::Settings;
use crate::models::Expense;

/// Format a single expense as a history row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:<15} {:<12} {:<10} {:>12}",
        expense.id,
        expense.date,
        expense.category,
        settings.format_money(expense.amount)
    )
}

/// Format the expense history, newest first
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<15} {:<12} {:<10} {:>12}\n",
        "ID", "Date", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(52));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}
