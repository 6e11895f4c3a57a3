//! Append-only audit log
//!
//! Entries are stored one JSON object per line in `audit.log`.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{GastosError, GastosResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one entry as a single write
    pub fn append(&self, entry: &AuditEntry) -> GastosResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.storage_error("open", e))?;
        file.write_all(&line)
            .map_err(|e| self.storage_error("append to", e))?;

        tracing::debug!(path = %self.path.display(), "audit entry appended");
        Ok(())
    }

    /// Every entry, oldest first; a missing log is empty
    pub fn entries(&self) -> GastosResult<Vec<AuditEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.storage_error("open", e)),
        };

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                GastosError::Storage(format!("Malformed audit log {}: {}", self.path.display(), e))
            })
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> GastosResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, e: io::Error) -> GastosError {
        GastosError::Storage(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.path.display(),
            e
        ))
    }
}
