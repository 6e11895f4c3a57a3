//! Ledger model
//!
//! The ordered collection of expenses, newest first by insertion. The ledger
//! serializes as a bare JSON array, matching the persisted layout.

use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;

/// Ordered collection of expenses, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from entries already in newest-first order
    pub fn from_entries(entries: Vec<Expense>) -> Self {
        Self { entries }
    }

    /// Insert an expense at the head of the ledger
    pub fn push_front(&mut self, expense: Expense) {
        self.entries.insert(0, expense);
    }

    /// Remove the expense with the given id, returning it if present
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn newest_id(&self) -> Option<ExpenseId> {
        self.entries.iter().map(|e| e.id).max()
    }

    /// Sum of all expense amounts, recomputed on every call
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Per-category totals in category display order, skipping empty ones
    pub fn totals_by_category(&self) -> Vec<(ExpenseCategory, Money)> {
        ExpenseCategory::ALL
            .iter()
            .map(|&category| {
                let total: Money = self
                    .entries
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum();
                (category, total)
            })
            .filter(|(_, total)| !total.is_zero())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
