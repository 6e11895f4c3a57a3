//! Account pair model
//!
//! The tracker follows exactly two balances: checking, which expenses are
//! paid from, and savings, which receives the monthly contribution.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Default opening checking balance
pub const DEFAULT_CHECKING: Money = Money::from_units(415);

/// Default opening savings balance
pub const DEFAULT_SAVINGS: Money = Money::from_units(6700);

/// Checking and savings balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPair {
    pub checking: Money,
    pub savings: Money,
}

impl AccountPair {
    pub fn new(checking: Money, savings: Money) -> Self {
        Self { checking, savings }
    }

    /// Pay an expense out of checking
    pub fn post_expense(&mut self, amount: Money) {
        self.checking -= amount;
    }

    /// Return a removed expense's amount to checking
    pub fn refund_expense(&mut self, amount: Money) {
        self.checking += amount;
    }

    /// Apply `count` monthly roll-overs: income minus the contribution lands
    /// in checking, the contribution lands in savings.
    pub fn apply_rollover(&mut self, income: Money, contribution: Money, count: u32) {
        let count = i64::from(count);
        self.checking += (income - contribution).times(count);
        self.savings += contribution.times(count);
    }
}

impl Default for AccountPair {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKING, DEFAULT_SAVINGS)
    }
}
