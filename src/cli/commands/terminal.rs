//! Terminal command implementation.

use crate::error::Result;
use crate::storage::Database;

/// Run the interactive terminal until stdin closes.
///
/// # Errors
///
/// Returns an error if stdin or stdout fail.
pub fn execute(mut db: Database, minimize: bool) -> Result<()> {
    db.terminal(minimize)
}
