//! Configuration management.
//!
//! Resolves where the database and the activity log live, and turns
//! command-line switches into handle [`Options`].

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::RowShape;
use crate::storage::{ErrorPolicy, Options};

/// Database path used when nothing else is configured (becomes
/// `database.sqlite`).
pub const DEFAULT_DB_PATH: &str = "database";

/// Environment variable naming the database file.
pub const DB_ENV: &str = "SQLW_DB";

/// Environment variable naming the activity log.
pub const LOG_ENV: &str = "SQLW_LOG";

/// Resolve the database path.
///
/// Priority:
/// 1. If `explicit_path` is provided, use it directly
/// 2. `SQLW_DB` environment variable
/// 3. `database` in the current directory
///
/// The `.sqlite` suffix is added later, by the handle.
///
/// # Errors
///
/// Returns [`Error::Config`] if the chosen path is blank.
pub fn resolve_db_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return non_blank("--db", path);
    }

    Ok(env_path(DB_ENV)?.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)))
}

/// Resolve the activity log path.
///
/// Priority:
/// 1. If `explicit_path` is provided, use it directly
/// 2. `SQLW_LOG` environment variable
/// 3. No log
///
/// # Errors
///
/// Returns [`Error::Config`] if the chosen path is blank.
pub fn resolve_log_path(explicit_path: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit_path {
        Some(path) => non_blank("--log", path).map(Some),
        None => env_path(LOG_ENV),
    }
}

/// Build handle options from the command-line switches.
#[must_use]
pub fn build_options(records: bool, return_errors: bool, log_path: Option<PathBuf>) -> Options {
    let shape = if records {
        RowShape::RawRecords
    } else {
        RowShape::Sequences
    };
    let policy = if return_errors {
        ErrorPolicy::Return
    } else {
        ErrorPolicy::Raise
    };

    let options = Options::new().with_row_shape(shape).with_error_policy(policy);
    match log_path {
        Some(path) => options.with_log_path(path),
        None => options,
    }
}

/// Unset is `None`; set but blank is a configuration mistake.
fn env_path(var: &str) -> Result<Option<PathBuf>> {
    match std::env::var_os(var) {
        Some(value) => non_blank(var, Path::new(&value)).map(Some),
        None => Ok(None),
    }
}

fn non_blank(source: &str, path: &Path) -> Result<PathBuf> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::Config(format!("{source} is set but empty")));
    }
    Ok(path.to_path_buf())
}
