//! CSV Export functionality
//!
//! One row per expense, newest first, spreadsheet-compatible.

use serde::Serialize;
use std::io::Write;

use crate::error::{GastosError, GastosResult};
use crate::models::Expense;

#[derive(Serialize)]
struct ExpenseRow<'a> {
    id: u64,
    date: &'a str,
    category: String,
    amount: String,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        let amount = expense.amount;
        Self {
            id: expense.id.as_u64(),
            date: &expense.date,
            category: expense.category.to_string(),
            amount: format!("{}.{:02}", amount.units(), amount.cents_part()),
        }
    }
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> GastosResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer
            .write_record(["id", "date", "category", "amount"])
            .map_err(|e| GastosError::Export(e.to_string()))?;
    }

    for expense in expenses {
        csv_writer
            .serialize(ExpenseRow::from(expense))
            .map_err(|e| GastosError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| GastosError::Export(e.to_string()))?;
    Ok(())
}
