//! Interactive session
//!
//! Keeps one tracker open and reads commands line by line, the way the
//! tracker behaves while it stays open. The roll-over is evaluated before
//! every command, so a session left running across the 1st picks up the
//! new month on the next command.

use std::io::{BufRead, Write};

use clap::Parser;

use crate::display::format_tick_result;
use crate::error::GastosResult;
use crate::services::Tracker;

use super::expense::{handle_tracker_command, TrackerCommand};

/// One line of session input
#[derive(Parser, Debug)]
#[command(name = "gastos", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: TrackerCommand,
}

/// Run a session until `quit`, `exit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    tracker: &mut Tracker<'_>,
    input: R,
    out: &mut W,
) -> GastosResult<()> {
    writeln!(out, "gastos session. Type 'help' for commands, 'quit' to leave.")?;

    for line in input.lines() {
        let line = line?;

        let words = match shell_words::split(&line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "Could not read command: {}", e)?;
                continue;
            }
        };

        let Some(first) = words.first() else {
            continue;
        };
        if matches!(first.as_str(), "quit" | "exit") {
            break;
        }

        let applied = tracker.tick()?;
        if applied > 0 {
            write!(
                out,
                "{}",
                format_tick_result(applied, &tracker.summary(), tracker.settings())
            )?;
        }

        match SessionLine::try_parse_from(&words) {
            Ok(parsed) => {
                if let Err(e) = handle_tracker_command(tracker, parsed.command, out) {
                    tracing::error!(error = %e, "session command failed");
                    writeln!(out, "Error: {}", e)?;
                }
            }
            Err(e) => write!(out, "{}", e.render())?,
        }
    }

    Ok(())
}
