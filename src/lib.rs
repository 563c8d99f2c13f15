//! sqlw - a convenience layer over an embedded SQLite database.
//!
//! A [`Database`](storage::Database) handle opens a fresh connection for
//! every call, runs one statement, collects the rows, commits and closes.
//! Results are collapsed into the smallest useful shape
//! ([`QueryOutput`](model::QueryOutput)), failures are raised or returned
//! as `error: ...` values depending on the handle's policy, and every
//! operation can be recorded in a plain-text activity log.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Values, rows and normalized results
//! - [`storage`] - Database handle, query helpers, activity log, terminal
//! - [`config`] - Path resolution and option building
//! - [`validate`] - Path rules applied at construction
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use sqlw::storage::{Database, ALL_COLUMNS};
//!
//! let db = Database::new("test"); // test.sqlite
//! db.create()?;
//! db.execute("create table t (id integer, name text)", None, true)?;
//! db.insert("t", [(1, "a"), (2, "b")])?;
//! assert_eq!(db.get("t", "id=1", ALL_COLUMNS, None)?.to_string(), "[1, 'a']");
//! # Ok::<(), sqlw::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod validate;

pub use error::{Error, Result};
