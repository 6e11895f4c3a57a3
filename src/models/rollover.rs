//! Monthly roll-over guard
//!
//! The roll-over credits the month's income to checking and moves the savings
//! contribution to savings. The guard records the last month the roll-over
//! was applied so that it fires at most once per calendar month, however
//! many times it is evaluated.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (month is 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Number of month boundaries from `earlier` to `self` (negative when
    /// `earlier` is actually later)
    pub fn months_since(&self, earlier: MonthKey) -> i64 {
        let this = i64::from(self.year) * 12 + i64::from(self.month);
        let that = i64::from(earlier.year) * 12 + i64::from(earlier.month);
        this - that
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// When the roll-over is allowed to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RolloverPolicy {
    /// Fire only when a tick lands on the 1st of a new month
    #[default]
    FirstOfMonth,
    /// Fire on the first tick of any later month, once per month missed
    CatchUp,
}

impl fmt::Display for RolloverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstOfMonth => write!(f, "first-of-month"),
            Self::CatchUp => write!(f, "catch-up"),
        }
    }
}

/// Tracks the last month the roll-over was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloverGuard {
    last_applied: MonthKey,
}

impl RolloverGuard {
    /// A guard that considers the month containing `date` already handled
    pub fn starting_at(date: NaiveDate) -> Self {
        Self {
            last_applied: MonthKey::of(date),
        }
    }

    pub fn from_month(last_applied: MonthKey) -> Self {
        Self { last_applied }
    }

    pub fn last_applied(&self) -> MonthKey {
        self.last_applied
    }

    /// How many roll-overs are owed on `today` under `policy`
    ///
    /// Never positive when the guard's month is not earlier than today's
    /// month, so a clock moved backwards cannot trigger a second transfer.
    pub fn due(&self, today: NaiveDate, policy: RolloverPolicy) -> u32 {
        let elapsed = MonthKey::of(today).months_since(self.last_applied);
        if elapsed <= 0 {
            return 0;
        }

        match policy {
            RolloverPolicy::FirstOfMonth if today.day() == 1 => 1,
            RolloverPolicy::FirstOfMonth => 0,
            RolloverPolicy::CatchUp => u32::try_from(elapsed).unwrap_or(u32::MAX),
        }
    }

    /// Record that today's month has been handled
    pub fn mark_applied(&mut self, today: NaiveDate) {
        self.last_applied = MonthKey::of(today);
    }

    /// True when the guard points past `today` (the clock went backwards)
    pub fn is_ahead_of(&self, today: NaiveDate) -> bool {
        self.last_applied > MonthKey::of(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_since() {
        let march = MonthKey::of(date(2026, 3, 15));
        let jan = MonthKey::of(date(2026, 1, 1));
        let dec = MonthKey::of(date(2025, 12, 31));
        assert_eq!(march.months_since(jan), 2);
        assert_eq!(jan.months_since(dec), 1);
        assert_eq!(dec.months_since(march), -3);
        assert_eq!(march.to_string(), "2026-03");
    }

    #[test]
    fn test_first_of_month_fires_only_on_day_one() {
        let guard = RolloverGuard::starting_at(date(2026, 10, 18));

        assert_eq!(guard.due(date(2026, 10, 31), RolloverPolicy::FirstOfMonth), 0);
        assert_eq!(guard.due(date(2026, 11, 2), RolloverPolicy::FirstOfMonth), 0);
        assert_eq!(guard.due(date(2026, 11, 1), RolloverPolicy::FirstOfMonth), 1);
    }

    #[test]
    fn test_fires_once_per_month() {
        let mut guard = RolloverGuard::starting_at(date(2026, 10, 18));
        let first = date(2026, 11, 1);

        assert_eq!(guard.due(first, RolloverPolicy::FirstOfMonth), 1);
        guard.mark_applied(first);
        assert_eq!(guard.due(first, RolloverPolicy::FirstOfMonth), 0);
        assert_eq!(guard.due(first, RolloverPolicy::CatchUp), 0);
    }

    #[test]
    fn test_same_month_number_next_year_still_fires() {
        let guard = RolloverGuard::starting_at(date(2025, 11, 1));
        assert_eq!(guard.due(date(2026, 11, 1), RolloverPolicy::FirstOfMonth), 1);
        assert_eq!(guard.due(date(2026, 11, 1), RolloverPolicy::CatchUp), 12);
    }

    #[test]
    fn test_catch_up_counts_missed_months() {
        let guard = RolloverGuard::starting_at(date(2026, 7, 20));
        assert_eq!(guard.due(date(2026, 10, 18), RolloverPolicy::CatchUp), 3);
    }

    #[test]
    fn test_clock_moved_backwards_never_fires() {
        let guard = RolloverGuard::starting_at(date(2026, 10, 18));
        let earlier = date(2026, 9, 1);

        assert!(guard.is_ahead_of(earlier));
        assert_eq!(guard.due(earlier, RolloverPolicy::FirstOfMonth), 0);
        assert_eq!(guard.due(earlier, RolloverPolicy::CatchUp), 0);
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&RolloverPolicy::CatchUp).unwrap(),
            "\"catch-up\""
        );
        let policy: RolloverPolicy = serde_json::from_str("\"first-of-month\"").unwrap();
        assert_eq!(policy, RolloverPolicy::FirstOfMonth);
    }
}
