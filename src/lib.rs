//! gastos - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the gastos expense
//! tracker: a ledger of categorized expenses paid from a checking account,
//! a savings account, and a monthly roll-over that credits income to
//! checking and moves a fixed contribution into savings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, ledger, accounts, roll-over)
//! - `state`: The in-memory session state and its pure updates
//! - `clock`: Time source used for ids, dates and the roll-over
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers and the interactive session
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos::clock::SystemClock;
//! use gastos::config::{GastosPaths, Settings};
//! use gastos::services::Tracker;
//! use gastos::storage::Storage;
//!
//! let paths = GastosPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let mut tracker = Tracker::open(&storage, &settings, &SystemClock)?;
//! tracker.add("12.50", gastos::models::ExpenseCategory::Leisure)?;
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;

pub use error::GastosError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG`; without it only warnings from this crate are shown.
/// Log lines go to stderr so they never mix with command output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gastos=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
