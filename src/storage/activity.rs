//! Activity log: one timestamped text line per event.
//!
//! Line format: `<local timestamp> | <text>`, e.g.
//! `2026-10-17 09:41:07.112233 | executed: select 1`.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::storage::file::append_text;
use crate::validate::validate_log_path;

/// Timestamp layout for log lines (local time, microseconds).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// First line written when a handle starts logging.
pub const ACTIVATED: &str = "database activated";

/// Append-only activity log backed by a `.txt` or `.log` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    /// Validate the path and record the activation line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::FileType`] for a bad suffix, or an I/O error
    /// if the activation line cannot be written.
    pub fn open(path: &Path) -> Result<Self> {
        validate_log_path(path)?;
        let log = Self {
            path: path.to_path_buf(),
        };
        log.record(ACTIVATED)?;
        Ok(log)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one event line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the log file cannot be written.
    pub fn record(&self, text: &str) -> Result<()> {
        let line = format_line(&chrono::Local::now(), text);
        append_text(&self.path, &line)
    }
}

fn format_line<Tz>(at: &chrono::DateTime<Tz>, text: &str) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} | {text}\n", at.format(TIMESTAMP_FORMAT))
}
