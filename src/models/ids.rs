//! Time-derived expense identifiers
//!
//! An expense id is the creation instant in milliseconds since the Unix
//! epoch. Ids must stay unique even when two expenses are recorded within
//! the same millisecond or the clock steps backwards, so allocation always
//! moves past the newest id already in use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique, monotonically increasing expense identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw millisecond timestamp
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Get the raw value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Allocate an id for an expense created at `now_millis`
    ///
    /// The result is strictly greater than `newest` when one is given.
    pub fn allocate(now_millis: u64, newest: Option<ExpenseId>) -> Self {
        match newest {
            Some(ExpenseId(last)) if now_millis <= last => Self(last.saturating_add(1)),
            _ => Self(now_millis),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_uses_clock_when_ahead() {
        let newest = Some(ExpenseId::from_millis(1_000));
        assert_eq!(ExpenseId::allocate(2_000, newest).as_u64(), 2_000);
        assert_eq!(ExpenseId::allocate(5, None).as_u64(), 5);
    }

    #[test]
    fn test_allocate_moves_past_newest() {
        let newest = Some(ExpenseId::from_millis(1_000));
        assert_eq!(ExpenseId::allocate(1_000, newest).as_u64(), 1_001);
        assert_eq!(ExpenseId::allocate(400, newest).as_u64(), 1_001);
    }

    #[test]
    fn test_parse_and_display() {
        let id: ExpenseId = " 1700000000123 ".parse().unwrap();
        assert_eq!(id.to_string(), "1700000000123");
        assert!("abc".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let id = ExpenseId::from_millis(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
