//! Application state container
//!
//! All tracker state lives in one `AppState`: the ledger, the two balances
//! and the roll-over guard. The update functions here are pure with respect
//! to the outside world. The clock reading and the persistence that follow
//! an update are the caller's job (see `services::tracker`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AccountPair, Expense, ExpenseCategory, ExpenseId, Ledger, Money, MonthKey, RolloverGuard,
    RolloverPolicy,
};

/// Amounts moved by one monthly roll-over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverRule {
    pub income: Money,
    pub contribution: Money,
}

impl RolloverRule {
    pub fn new(income: Money, contribution: Money) -> Self {
        Self {
            income,
            contribution,
        }
    }
}

/// The complete in-memory state of one tracker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub ledger: Ledger,
    pub accounts: AccountPair,
    pub guard: RolloverGuard,
}

impl AppState {
    pub fn new(ledger: Ledger, accounts: AccountPair, guard: RolloverGuard) -> Self {
        Self {
            ledger,
            accounts,
            guard,
        }
    }

    /// Record an expense at the head of the ledger and pay it from checking
    ///
    /// `now_millis` seeds the id; `date` is the already formatted date label.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: ExpenseCategory,
        now_millis: u64,
        date: String,
    ) -> Expense {
        let id = ExpenseId::allocate(now_millis, self.ledger.newest_id());
        let expense = Expense::new(id, amount, category, date);
        self.ledger.push_front(expense.clone());
        self.accounts.post_expense(amount);
        expense
    }

    /// Remove an expense and return its stored amount to checking
    ///
    /// Unknown ids leave the state untouched.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        let removed = self.ledger.remove(id)?;
        self.accounts.refund_expense(removed.amount);
        Some(removed)
    }

    /// Evaluate the roll-over for `today`, returning how many were applied
    pub fn roll_over(&mut self, today: NaiveDate, rule: RolloverRule, policy: RolloverPolicy) -> u32 {
        let due = self.guard.due(today, policy);
        if due == 0 {
            return 0;
        }
        self.accounts
            .apply_rollover(rule.income, rule.contribution, due);
        self.guard.mark_applied(today);
        due
    }

    /// Sum of all expenses
    pub fn total(&self) -> Money {
        self.ledger.total()
    }

    /// Balances and guard in their persisted shape
    pub fn balance_state(&self) -> BalanceState {
        BalanceState {
            checking: self.accounts.checking,
            savings: self.accounts.savings,
            last_rollover: self.guard.last_applied(),
        }
    }
}

/// On-disk shape of the balances and roll-over guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceState {
    pub checking: Money,
    pub savings: Money,
    pub last_rollover: MonthKey,
}

impl BalanceState {
    pub fn accounts(&self) -> AccountPair {
        AccountPair::new(self.checking, self.savings)
    }

    pub fn guard(&self) -> RolloverGuard {
        RolloverGuard::from_month(self.last_rollover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule() -> RolloverRule {
        RolloverRule::new(Money::from_units(1364), Money::from_units(400))
    }

    fn fresh_state(today: NaiveDate) -> AppState {
        AppState::new(
            Ledger::new(),
            AccountPair::default(),
            RolloverGuard::starting_at(today),
        )
    }

    #[test]
    fn test_add_then_remove_restores_balances() {
        let mut state = fresh_state(date(2026, 10, 18));

        let expense = state.add_expense(
            Money::from_units(50),
            ExpenseCategory::Fuel,
            1_000,
            "18/10/2026".into(),
        );
        assert_eq!(state.accounts.checking, Money::from_units(365));
        assert_eq!(state.total(), Money::from_units(50));
        assert_eq!(state.ledger.len(), 1);

        let removed = state.remove_expense(expense.id).unwrap();
        assert_eq!(removed, expense);
        assert_eq!(state.accounts.checking, Money::from_units(415));
        assert!(state.total().is_zero());
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_changes_nothing() {
        let mut state = fresh_state(date(2026, 10, 18));
        state.add_expense(
            Money::from_units(20),
            ExpenseCategory::Other,
            1_000,
            "18/10/2026".into(),
        );
        let before = state.clone();

        assert!(state.remove_expense(ExpenseId::from_millis(7)).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut state = fresh_state(date(2026, 10, 18));
        let a = state.add_expense(Money::from_units(1), ExpenseCategory::Fuel, 500, "x".into());
        let b = state.add_expense(Money::from_units(2), ExpenseCategory::Fuel, 500, "x".into());
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
        assert_eq!(state.ledger.entries()[0].id, b.id);
    }

    #[test]
    fn test_rollover_on_first_then_idempotent() {
        let mut state = fresh_state(date(2026, 10, 18));
        let first = date(2026, 11, 1);

        assert_eq!(state.roll_over(first, rule(), RolloverPolicy::FirstOfMonth), 1);
        assert_eq!(state.accounts.checking, Money::from_units(415 + 964));
        assert_eq!(state.accounts.savings, Money::from_units(7100));
        assert_eq!(state.guard.last_applied(), MonthKey::of(first));

        let after_first = state.clone();
        assert_eq!(state.roll_over(first, rule(), RolloverPolicy::FirstOfMonth), 0);
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_rollover_skipped_off_day_one() {
        let mut state = fresh_state(date(2026, 10, 18));
        let before = state.clone();
        assert_eq!(
            state.roll_over(date(2026, 11, 2), rule(), RolloverPolicy::FirstOfMonth),
            0
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_catch_up_applies_each_missed_month() {
        let mut state = fresh_state(date(2026, 7, 5));
        assert_eq!(
            state.roll_over(date(2026, 10, 18), rule(), RolloverPolicy::CatchUp),
            3
        );
        assert_eq!(state.accounts.checking, Money::from_units(415 + 3 * 964));
        assert_eq!(state.accounts.savings, Money::from_units(6700 + 1200));
    }

    #[test]
    fn test_balance_state_round_trip() {
        let state = fresh_state(date(2026, 10, 18));
        let persisted = state.balance_state();
        let json = serde_json::to_string(&persisted).unwrap();
        let back: BalanceState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.accounts(), state.accounts);
        assert_eq!(back.guard(), state.guard);
    }
}
