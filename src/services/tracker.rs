//! Tracker service
//!
//! Owns the session's `AppState` and wraps every pure state update with the
//! side effects it needs: reading the clock, writing the ledger (and, when
//! enabled, the balances) back to disk, and recording the audit trail.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditEvent};
use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{GastosError, GastosResult};
use crate::models::{
    AccountPair, Expense, ExpenseCategory, ExpenseId, Ledger, Money, MonthKey, RolloverGuard,
};
use crate::state::{AppState, RolloverRule};
use crate::storage::Storage;

/// Options for filtering the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    pub limit: Option<usize>,
}

/// Everything the status report shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSummary {
    pub checking: Money,
    pub savings: Money,
    pub total_expenses: Money,
    /// Savings expected at the current pace (today: the savings balance)
    pub projected_savings: Money,
    pub savings_goal: Money,
    pub expense_count: usize,
    pub by_category: Vec<(ExpenseCategory, Money)>,
    pub last_rollover: MonthKey,
    pub balances_persisted: bool,
}

impl TrackerSummary {
    /// Progress toward the savings goal in whole percent
    pub fn goal_percent(&self) -> i64 {
        if !self.savings_goal.is_positive() {
            return 100;
        }
        let percent = i128::from(self.projected_savings.cents()) * 100
            / i128::from(self.savings_goal.cents());
        i64::try_from(percent).unwrap_or(i64::MAX)
    }
}

/// Service for one tracker session
pub struct Tracker<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    clock: &'a dyn Clock,
    state: AppState,
}

impl<'a> Tracker<'a> {
    /// Open a session: hydrate the ledger, restore or reset the balances,
    /// then run the start-of-session tick.
    pub fn open(
        storage: &'a Storage,
        settings: &'a Settings,
        clock: &'a dyn Clock,
    ) -> GastosResult<Self> {
        let ledger = storage.expenses.load()?;
        let today = clock.today();

        let (accounts, guard) = if settings.persist_balances {
            match storage.balances.load()? {
                Some(saved) => (saved.accounts(), saved.guard()),
                None => (settings.initial_accounts(), RolloverGuard::starting_at(today)),
            }
        } else {
            tracing::warn!(
                "balances and roll-over month are not persisted; starting from configured defaults"
            );
            (settings.initial_accounts(), RolloverGuard::starting_at(today))
        };

        let mut tracker = Self {
            storage,
            settings,
            clock,
            state: AppState::new(ledger, accounts, guard),
        };
        tracker.tick()?;
        Ok(tracker)
    }

    /// Record an expense from raw user input
    ///
    /// Input that is empty, not a number, not positive, or too large for the
    /// balances to absorb is ignored and yields `Ok(None)` without touching
    /// any state.
    pub fn add(&mut self, raw_amount: &str, category: ExpenseCategory) -> GastosResult<Option<Expense>> {
        let amount = match Money::parse(raw_amount) {
            Ok(amount) if amount.is_positive() => amount,
            _ => {
                tracing::debug!(input = raw_amount, "ignoring invalid expense amount");
                return Ok(None);
            }
        };

        let fits = self.state.accounts.checking.checked_sub(amount).is_some()
            && self.state.total().checked_add(amount).is_some();
        if !fits {
            tracing::debug!(input = raw_amount, "ignoring expense amount out of range");
            return Ok(None);
        }

        let date = self.format_date(self.clock.today())?;
        let expense = self
            .state
            .add_expense(amount, category, self.clock.now_millis(), date);
        self.persist()?;

        self.record(AuditEvent::ExpenseAdded {
            expense: expense.clone(),
            checking_after: self.state.accounts.checking,
        })?;
        tracing::debug!(id = %expense.id, amount = %expense.amount, "expense added");

        Ok(Some(expense))
    }

    /// Remove an expense by id, refunding its stored amount to checking
    ///
    /// Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: ExpenseId) -> GastosResult<Option<Expense>> {
        let Some(removed) = self.state.remove_expense(id) else {
            tracing::debug!(%id, "no expense to remove");
            return Ok(None);
        };
        self.persist()?;

        self.record(AuditEvent::ExpenseRemoved {
            expense: removed.clone(),
            checking_after: self.state.accounts.checking,
        })?;

        Ok(Some(removed))
    }

    /// Evaluate the monthly roll-over, returning how many were applied
    pub fn tick(&mut self) -> GastosResult<u32> {
        let today = self.clock.today();
        if self.state.guard.is_ahead_of(today) {
            tracing::warn!(
                guard = %self.state.guard.last_applied(),
                %today,
                "roll-over month is ahead of today's date; clock may have moved backwards"
            );
        }

        let before = self.state.accounts;
        let applied = self.state.roll_over(today, self.rule(), self.settings.rollover_policy);
        if applied == 0 {
            return Ok(0);
        }

        self.persist_balances()?;
        let month = self.state.guard.last_applied();
        self.record(AuditEvent::RolloverApplied {
            month,
            applied,
            before,
            after: self.state.accounts,
        })?;
        tracing::info!(%month, applied, "monthly roll-over applied");

        Ok(applied)
    }

    /// Sum of all recorded expenses
    pub fn total(&self) -> Money {
        self.state.total()
    }

    /// Expenses newest first, filtered
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        let matching = self
            .state
            .ledger
            .iter()
            .filter(|e| filter.category.map_or(true, |c| e.category == c))
            .cloned();

        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }

    pub fn summary(&self) -> TrackerSummary {
        let accounts = self.state.accounts;
        TrackerSummary {
            checking: accounts.checking,
            savings: accounts.savings,
            total_expenses: self.state.total(),
            projected_savings: accounts.savings,
            savings_goal: self.settings.savings_goal,
            expense_count: self.state.ledger.len(),
            by_category: self.state.ledger.totals_by_category(),
            last_rollover: self.state.guard.last_applied(),
            balances_persisted: self.settings.persist_balances,
        }
    }

    pub fn accounts(&self) -> AccountPair {
        self.state.accounts
    }

    pub fn ledger(&self) -> &Ledger {
        &self.state.ledger
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    pub fn storage(&self) -> &Storage {
        self.storage
    }

    fn rule(&self) -> RolloverRule {
        RolloverRule::new(self.settings.monthly_income, self.settings.monthly_contribution)
    }

    fn format_date(&self, date: NaiveDate) -> GastosResult<String> {
        let mut label = String::new();
        write!(label, "{}", date.format(&self.settings.date_format)).map_err(|_| {
            GastosError::Config(format!("Invalid date_format '{}'", self.settings.date_format))
        })?;
        Ok(label)
    }

    fn record(&self, event: AuditEvent) -> GastosResult<()> {
        self.storage
            .audit()
            .append(&AuditEntry::at_millis(self.clock.now_millis(), event))
    }

    fn persist(&self) -> GastosResult<()> {
        self.storage.expenses.save(&self.state.ledger)?;
        self.persist_balances()
    }

    fn persist_balances(&self) -> GastosResult<()> {
        if self.settings.persist_balances {
            self.storage.balances.save(&self.state.balance_state())?;
        }
        Ok(())
    }
}
