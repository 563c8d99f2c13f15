//! Version command implementation.

use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    sqlite: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let sqlite = rusqlite::version();

    if json {
        let output = VersionOutput { version, sqlite };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("sqlw version {version} (sqlite {sqlite})");
    Ok(())
}
