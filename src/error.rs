//! Error types for sqlw.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=db, 4=validation, 7=config, 8=io)
//! - Retryability flags (lock contention is worth another attempt)
//! - Context-aware recovery hints
//! - Structured JSON output for piped consumers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sqlw operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Database (exit 2)
    DatabaseError,
    DatabaseBusy,

    // Validation (exit 4)
    InvalidArgument,

    // Config (exit 7)
    FileTypeError,
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseBusy => "DATABASE_BUSY",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::FileTypeError => "FILE_TYPE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::DatabaseError | Self::DatabaseBusy => 2,
            Self::InvalidArgument => 4,
            Self::FileTypeError | Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether the same call may succeed if simply repeated.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::DatabaseBusy)
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in sqlw operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The activity log path has an unsupported extension.
    #[error("log file must end with .txt or .log: {}", path.display())]
    FileType { path: PathBuf },

    /// Engine failures are displayed bare so the returned sentinel reads
    /// `error: no such table: t`.
    #[error("{0}")]
    Database(#[from] rusqlite::Error),

    /// Raw statement text held more than one statement.
    #[error("you can only execute one statement at a time")]
    MultipleStatements,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A blocking query task panicked or was cancelled.
    #[error("Query task failed: {0}")]
    Task(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::FileType { .. } => ErrorCode::FileTypeError,
            Self::Database(err) if is_busy(err) => ErrorCode::DatabaseBusy,
            Self::Database(_) | Self::MultipleStatements => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Task(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::FileType { path } => Some(format!(
                "Rename '{}' so it ends in .txt or .log, or omit --log.",
                path.display()
            )),

            Self::Database(err) if is_busy(err) => Some(
                "Another connection holds a lock on the database file. Retry once it finishes."
                    .to_string(),
            ),

            Self::Database(err) => {
                let msg = err.to_string();
                if msg.contains("no such table") {
                    Some("Create the table first: sqlw exec \"create table ...\"".to_string())
                } else if msg.contains("syntax error") {
                    Some("Statements are sent verbatim; check quoting of text values.".to_string())
                } else {
                    None
                }
            }

            Self::MultipleStatements => {
                Some("Send one statement per call; nothing was run.".to_string())
            }

            Self::Io(_) | Self::Json(_) | Self::InvalidArgument(_) | Self::Config(_)
            | Self::Task(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}

fn is_busy(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_is_config_category() {
        let err = Error::FileType {
            path: PathBuf::from("activity.csv"),
        };
        assert_eq!(err.error_code(), ErrorCode::FileTypeError);
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().contains("activity.csv"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_database_error_displays_engine_message() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err: Error = conn.execute("select * from missing", []).unwrap_err().into();
        assert_eq!(err.to_string(), "no such table: missing");
        assert_eq!(err.error_code(), ErrorCode::DatabaseError);
        assert!(!err.error_code().is_retryable());
    }

    #[test]
    fn test_config_error_category() {
        let err = Error::Config("SQLW_DB is set but empty".to_string());
        assert_eq!(err.error_code(), ErrorCode::ConfigError);
        assert_eq!(err.exit_code(), 7);
        assert_eq!(err.error_code().as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_structured_json_shape() {
        let err = Error::InvalidArgument("empty table name".to_string());
        let json = err.to_structured_json();
        assert_eq!(json["error"]["code"], "INVALID_ARGUMENT");
        assert_eq!(json["error"]["exit_code"], 4);
        assert_eq!(json["error"]["retryable"], false);
        assert!(json["error"].get("hint").is_none());
    }
}
