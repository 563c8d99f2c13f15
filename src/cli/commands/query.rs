//! Query command implementations (create, exec, fetch, get, insert, drop).

use crate::cli::{Cli, Commands};
use crate::config::{build_options, resolve_db_path, resolve_log_path};
use crate::error::{Error, Result};
use crate::model::QueryOutput;
use crate::storage::Database;
use serde::Serialize;
use tracing::debug;

/// JSON envelope for every query command.
#[derive(Serialize)]
struct QueryJson<'a> {
    database: String,
    ok: bool,
    result: &'a QueryOutput,
}

/// Build the database handle from global flags.
///
/// # Errors
///
/// Returns [`Error::Config`] if a configured path is blank, or
/// [`Error::FileType`] if the log path has a bad suffix.
pub fn open_database(cli: &Cli) -> Result<Database> {
    let db_path = resolve_db_path(cli.db.as_deref())?;
    let log_path = resolve_log_path(cli.log.as_deref())?;
    debug!(db = %db_path.display(), log = ?log_path, "opening handle");

    Database::open(
        db_path,
        build_options(cli.records, cli.return_errors, log_path),
    )
}

/// Execute a query command.
///
/// # Errors
///
/// Returns the query error under the raise policy, or any I/O error.
pub fn execute(command: &Commands, db: &Database, json: bool) -> Result<()> {
    let output = match command {
        Commands::Create => QueryOutput::Message(db.create()?),
        Commands::Exec { query, out, raw } => db.execute(query, out.as_deref(), !raw)?,
        Commands::Fetch { table, items, out } => db.fetch(table, items, out.as_deref())?,
        Commands::Get {
            table,
            condition,
            items,
            out,
        } => db.get(table, condition, items, out.as_deref())?,
        Commands::Insert { table, rows } => db.insert(table, rows)?,
        Commands::Drop { table } => db.drop(table)?,
        other => {
            return Err(Error::InvalidArgument(format!(
                "not a query command: {other:?}"
            )));
        }
    };

    print_output(db, &output, json)
}

fn print_output(db: &Database, output: &QueryOutput, json: bool) -> Result<()> {
    if json {
        let payload = QueryJson {
            database: db.path().display().to_string(),
            ok: !output.is_error(),
            result: output,
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{output}");
    }
    Ok(())
}
