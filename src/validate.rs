//! Path rules applied when a database handle is constructed.
//!
//! Both checks are pure string rules on the path as given: the database
//! file always carries the `.sqlite` suffix, and the activity log must be a
//! plain text file.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix every database file carries.
pub const DATABASE_SUFFIX: &str = ".sqlite";

/// Suffixes accepted for the activity log.
pub const LOG_SUFFIXES: [&str; 2] = [".txt", ".log"];

/// Append `.sqlite` unless the path already ends with it.
///
/// `test` becomes `test.sqlite`, `data.db` becomes `data.db.sqlite`.
#[must_use]
pub fn normalize_db_path(path: &Path) -> PathBuf {
    if path.to_string_lossy().ends_with(DATABASE_SUFFIX) {
        return path.to_path_buf();
    }

    let mut raw = OsString::from(path.as_os_str());
    raw.push(DATABASE_SUFFIX);
    PathBuf::from(raw)
}

/// Check that a log path ends in `.txt` or `.log`.
///
/// # Errors
///
/// Returns [`Error::FileType`] for any other suffix.
pub fn validate_log_path(path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    if LOG_SUFFIXES.iter().any(|suffix| text.ends_with(suffix)) {
        Ok(())
    } else {
        Err(Error::FileType {
            path: path.to_path_buf(),
        })
    }
}

/// Reject identifiers that would produce an empty statement fragment.
///
/// This is not an injection guard: identifiers are still interpolated
/// verbatim. It only catches the blank argument that would otherwise
/// surface as an engine syntax error far from its cause.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is blank.
pub fn require_non_blank(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{what} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_appends_suffix() {
        assert_eq!(normalize_db_path(Path::new("test")), PathBuf::from("test.sqlite"));
        assert_eq!(
            normalize_db_path(Path::new("dir/data.db")),
            PathBuf::from("dir/data.db.sqlite")
        );
    }

    #[test]
    fn test_normalize_keeps_existing_suffix() {
        assert_eq!(
            normalize_db_path(Path::new("test.sqlite")),
            PathBuf::from("test.sqlite")
        );
    }

    #[test]
    fn test_log_suffixes() {
        assert!(validate_log_path(Path::new("activity.txt")).is_ok());
        assert!(validate_log_path(Path::new("logs/activity.log")).is_ok());

        for bad in ["activity", "activity.csv", "activity.txt.bak", "activity.LOG"] {
            let err = validate_log_path(Path::new(bad)).unwrap_err();
            assert!(matches!(err, Error::FileType { .. }), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("table", "users").is_ok());
        assert!(matches!(
            require_non_blank("table", "  "),
            Err(Error::InvalidArgument(_))
        ));
    }
}
