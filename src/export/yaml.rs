//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable format.

use std::io::Write;

use crate::error::{GastosError, GastosResult};
use crate::export::json::FullExport;
use crate::services::Tracker;

/// Export everything to YAML
pub fn export_full_yaml<W: Write>(tracker: &Tracker<'_>, writer: &mut W) -> GastosResult<()> {
    let export = FullExport::from_tracker(tracker);

    writeln!(writer, "# gastos export").map_err(|e| GastosError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| GastosError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| GastosError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| GastosError::Export(e.to_string()))?;

    Ok(())
}
