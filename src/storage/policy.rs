//! Handle configuration: row shape, error policy, log path, session mode.

use std::path::{Path, PathBuf};

use crate::model::RowShape;

/// What a query helper does with a failure after logging it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the failure as `Err`.
    #[default]
    Raise,
    /// Return `Ok(QueryOutput::Error(..))`, which displays as `error: <message>`.
    Return,
}

/// Session state of a handle.
///
/// The only transition is `Normal -> Interactive`, taken when the terminal
/// loop starts. It never reverts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Inside the terminal loop; failures are always returned, never raised.
    Interactive,
}

impl Mode {
    /// The policy actually applied, given the configured one.
    #[must_use]
    pub const fn effective_policy(self, configured: ErrorPolicy) -> ErrorPolicy {
        match self {
            Self::Normal => configured,
            Self::Interactive => ErrorPolicy::Return,
        }
    }
}

/// Construction options for a [`crate::storage::Database`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub row_shape: RowShape,
    pub error_policy: ErrorPolicy,
    /// Activity log; must end in `.txt` or `.log`.
    pub log_path: Option<PathBuf>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_row_shape(mut self, shape: RowShape) -> Self {
        self.row_shape = shape;
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    #[must_use]
    pub fn with_log_path(mut self, path: impl AsRef<Path>) -> Self {
        self.log_path = Some(path.as_ref().to_path_buf());
        self
    }
}
