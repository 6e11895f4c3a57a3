//! Expense categories
//!
//! The tracker has exactly four fixed categories. On disk they keep the
//! Spanish identifiers used by the ledger format (`gasolina`, `ropa`, `ocio`,
//! `otros`); on the command line both the English and Spanish names work.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum ExpenseCategory {
    /// Fuel for the car
    #[default]
    #[serde(rename = "gasolina")]
    Fuel,
    /// Clothing
    #[serde(rename = "ropa")]
    Clothing,
    /// Leisure and going out
    #[serde(rename = "ocio")]
    Leisure,
    /// Anything else
    #[serde(rename = "otros")]
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 4] = [Self::Fuel, Self::Clothing, Self::Leisure, Self::Other];

    /// Parse a category from user input (English or Spanish, case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fuel" | "gas" | "gasolina" => Some(Self::Fuel),
            "clothing" | "clothes" | "ropa" => Some(Self::Clothing),
            "leisure" | "fun" | "ocio" => Some(Self::Leisure),
            "other" | "otros" | "otro" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fuel => write!(f, "Fuel"),
            Self::Clothing => write!(f, "Clothing"),
            Self::Leisure => write!(f, "Leisure"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid category: '{}'. Valid categories: fuel, clothing, leisure, other",
                s
            )
        })
    }
}
