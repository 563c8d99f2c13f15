//! Append-only text writes for the activity log and result exports.
//!
//! Every call opens the file in append mode, writes, and closes it again.
//! No handle is held between calls, so concurrent writers interleave at the
//! granularity of one append.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Append `text` to the file at `path`, creating the file (and its parent
/// directory) if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn append_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    Ok(())
}

/// Make sure a file exists without changing its contents.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn touch(path: &Path) -> Result<()> {
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}
