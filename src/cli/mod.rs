//! CLI definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// sqlw - one-shot SQLite queries with normalized results
#[derive(Parser, Debug)]
#[command(name = "sqlw", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path; `.sqlite` is appended if missing (default: database)
    #[arg(long, global = true, env = "SQLW_DB")]
    pub db: Option<PathBuf>,

    /// Activity log file (.txt or .log)
    #[arg(long, global = true, env = "SQLW_LOG")]
    pub log: Option<PathBuf>,

    /// Present rows as native records `(1, 'a')` instead of lists `[1, 'a']`
    #[arg(long, global = true)]
    pub records: bool,

    /// Print failures as `error: ...` results instead of failing the command
    #[arg(long, global = true)]
    pub return_errors: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no diagnostics, errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database file if it does not exist
    Create,

    /// Run any statement verbatim
    Exec {
        /// SQL statement
        query: String,

        /// Append the result to this file
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print rows unnormalized
        #[arg(long)]
        raw: bool,
    },

    /// Select columns from a table
    Fetch {
        /// Table name
        table: String,

        /// Column list
        #[arg(short, long, default_value = "*")]
        items: String,

        /// Append the result to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Select columns from a table with a where clause
    Get {
        /// Table name
        table: String,

        /// Where clause, e.g. "id = 1"
        condition: String,

        /// Column list
        #[arg(short, long, default_value = "*")]
        items: String,

        /// Append the result to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Insert rows, one statement per row, committed together
    Insert {
        /// Table name
        table: String,

        /// Row values as SQL text, e.g. "1, 'a'"
        #[arg(required = true)]
        rows: Vec<String>,
    },

    /// Drop a table
    Drop {
        /// Table name
        table: String,
    },

    /// Interactive query terminal (reads until end of input)
    Terminal {
        /// Erase the prompt line before printing each result
        #[arg(long)]
        minimize: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print version information
    Version,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_get_with_items() {
        let cli = Cli::parse_from([
            "sqlw", "--db", "shop", "get", "orders", "id = 1", "--items", "total",
        ]);
        assert_eq!(cli.db, Some(PathBuf::from("shop")));
        match cli.command {
            Commands::Get {
                table,
                condition,
                items,
                out,
            } => {
                assert_eq!(table, "orders");
                assert_eq!(condition, "id = 1");
                assert_eq!(items, "total");
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
