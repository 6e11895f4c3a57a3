//! Core data models for gastos
//!
//! This module contains the data structures of the tracker domain: expenses,
//! the ledger that orders them, the checking/savings pair, and the monthly
//! roll-over guard.

pub mod account;
pub mod category;
pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod rollover;

pub use account::AccountPair;
pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use rollover::{MonthKey, RolloverGuard, RolloverPolicy};
