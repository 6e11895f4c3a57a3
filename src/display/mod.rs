//! Display formatting for terminal output

pub mod expense;
pub mod history;
pub mod summary;

pub use expense::{format_expense_list, format_expense_row};
pub use history::format_history;
pub use summary::{format_summary, format_tick_result};
