//! Time source for the tracker
//!
//! Expense ids, expense dates and the roll-over tick all read the current
//! time through `Clock`, so tests and scripted runs can pin the date.

use std::cell::Cell;

use chrono::{Local, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{GastosError, GastosResult};

/// Environment variable pinning today's date (`YYYY-MM-DD`)
pub const TODAY_ENV: &str = "GASTOS_TODAY";

pub trait Clock {
    /// Today's local calendar date
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// The system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// A clock stuck on one date, at noon UTC
///
/// The date can be moved while a session holds the clock, which is how
/// tests cross a month boundary mid-session.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn on(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }

    fn now_millis(&self) -> u64 {
        let noon = self.today().and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default());
        u64::try_from(Utc.from_utc_datetime(&noon).timestamp_millis()).unwrap_or(0)
    }
}

/// The system clock, or a fixed one when `GASTOS_TODAY` is set
pub fn clock_from_env() -> GastosResult<Box<dyn Clock>> {
    match std::env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let today = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                GastosError::Config(format!("Invalid {} '{}': {}", TODAY_ENV, raw, e))
            })?;
            tracing::debug!(%today, "using pinned date");
            Ok(Box::new(FixedClock::on(today)))
        }
        _ => Ok(Box::new(SystemClock)),
    }
}
