//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod session;

pub use expense::{handle_tracker_command, ExportFormat, TrackerCommand};
pub use session::run_session;
