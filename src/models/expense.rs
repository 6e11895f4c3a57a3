//! Expense model
//!
//! A single recorded expense. Expenses are immutable once created; the only
//! way to change one is to remove it and record a new one.

use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
///
/// Field names on disk follow the ledger file layout
/// (`id`, `monto`, `categoria`, `fecha`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, time-derived identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    #[serde(rename = "monto")]
    pub amount: Money,

    /// Spending category
    #[serde(rename = "categoria")]
    pub category: ExpenseCategory,

    /// Calendar date the expense was recorded, already formatted for display
    #[serde(rename = "fecha")]
    pub date: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        amount: Money,
        category: ExpenseCategory,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            date: date.into(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.date.trim().is_empty() {
            return Err(ExpenseValidationError::MissingDate);
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    MissingDate,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::MissingDate => write!(f, "Expense date is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(
            ExpenseId::from_millis(1_760_000_000_000),
            Money::from_cents(5000),
            ExpenseCategory::Fuel,
            "18/10/2026",
        )
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut zero = sample();
        zero.amount = Money::zero();
        assert_eq!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );

        let mut undated = sample();
        undated.date = "  ".into();
        assert_eq!(undated.validate(), Err(ExpenseValidationError::MissingDate));
    }

    #[test]
    fn test_storage_layout() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1_760_000_000_000u64,
                "monto": 50.0,
                "categoria": "gasolina",
                "fecha": "18/10/2026"
            })
        );
    }

    #[test]
    fn test_reads_browser_storage_record() {
        let raw = r#"{"id":1718000000000,"monto":12.35,"categoria":"ocio","fecha":"10/6/2024"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.amount.cents(), 1235);
        assert_eq!(expense.category, ExpenseCategory::Leisure);
        assert_eq!(expense.date, "10/6/2024");
    }
}
