//! Service layer for gastos
//!
//! The service layer runs the state updates of a session and the side
//! effects that follow them (persistence, audit trail, logging).

pub mod tracker;

pub use tracker::{ExpenseFilter, Tracker, TrackerSummary};
