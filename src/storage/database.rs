//! The database handle and its query helpers.
//!
//! Every helper follows the same protocol:
//! 1. Open a fresh connection to the database file
//! 2. Run exactly one statement and collect all rows. Data changes
//!    (`insert`, `update`, `delete`, `replace`) run inside an explicit
//!    transaction that is committed afterwards; anything else runs in
//!    autocommit so `vacuum`, `pragma` and transaction control work verbatim
//! 3. On failure, drop the transaction (rolling it back) and hand the error
//!    to the error policy
//! 4. On success, normalize, optionally export, log one line, return
//!
//! # Raw statements
//!
//! `execute`, `fetch`, `get`, `insert` and `drop` interpolate their string
//! arguments into SQL verbatim. This keeps ad-hoc querying flexible and is
//! unsafe for untrusted input. Use [`Database::execute_with_params`] when
//! values come from outside.

use rusqlite::{Batch, Connection, ToSql};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::{normalize, QueryOutput, Row, RowShape, SqlRow, Value};
use crate::storage::activity::ActivityLog;
use crate::storage::file::{append_text, touch};
use crate::storage::policy::{ErrorPolicy, Mode, Options};
use crate::validate::{normalize_db_path, require_non_blank};

/// Column list used when the caller does not pick one.
pub const ALL_COLUMNS: &str = "*";

/// Handle to one SQLite database file.
///
/// Holds no connection between calls; each helper opens and releases its
/// own, so a handle is cheap to clone and share across threads.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    name: String,
    row_shape: RowShape,
    error_policy: ErrorPolicy,
    log: Option<ActivityLog>,
    mode: Mode,
}

impl Database {
    /// Create a handle with default options (list rows, raise errors, no log).
    ///
    /// The `.sqlite` suffix is appended if missing. The database file is not
    /// touched.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            path: normalize_db_path(path),
            name: path.display().to_string(),
            row_shape: RowShape::default(),
            error_policy: ErrorPolicy::default(),
            log: None,
            mode: Mode::Normal,
        }
    }

    /// Create a handle with explicit options.
    ///
    /// If a log path is configured it is validated and a
    /// `database activated` line is appended to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileType`] if the log path does not end in `.txt` or
    /// `.log`, whatever the error policy. Returns an I/O error if the
    /// activation line cannot be written.
    pub fn open(path: impl AsRef<Path>, options: Options) -> Result<Self> {
        let log = options
            .log_path
            .as_deref()
            .map(ActivityLog::open)
            .transpose()?;

        let mut db = Self::new(path);
        db.row_shape = options.row_shape;
        db.error_policy = options.error_policy;
        db.log = log;

        debug!(db = %db.path.display(), shape = ?db.row_shape, policy = ?db.error_policy, "database handle ready");
        Ok(db)
    }

    /// Normalized path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path exactly as the caller passed it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn row_shape(&self) -> RowShape {
        self.row_shape
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The policy applied to failures right now.
    #[must_use]
    pub const fn error_policy(&self) -> ErrorPolicy {
        self.mode.effective_policy(self.error_policy)
    }

    #[must_use]
    pub fn log_path(&self) -> Option<&Path> {
        self.log.as_ref().map(ActivityLog::path)
    }

    /// Switch to interactive mode. Failures are returned from now on.
    pub fn enter_interactive(&mut self) {
        if self.mode == Mode::Normal {
            info!(db = %self.path.display(), "entering interactive mode");
        }
        self.mode = Mode::Interactive;
    }

    // ==================
    // Lifecycle
    // ==================

    /// Make sure the database file exists; a new file is left empty.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or the log line
    /// cannot be written.
    pub fn create(&self) -> Result<String> {
        touch(&self.path)?;
        info!(db = %self.path.display(), "database file ready");
        self.log(&format!("created database at {}", self.path.display()))?;
        Ok(format!(
            "successfully initialised database under {}",
            self.path.display()
        ))
    }

    // ==================
    // Query helpers
    // ==================

    /// Run any statement verbatim.
    ///
    /// With `format == false` the rows are returned unnormalized as
    /// [`QueryOutput::Raw`]. With `export` set, the stringified result is
    /// appended to that file.
    ///
    /// # Errors
    ///
    /// Under [`ErrorPolicy::Raise`], returns the engine error. Under either
    /// policy, returns an I/O error if the log or export file cannot be
    /// written.
    pub fn execute(&self, query: &str, export: Option<&Path>, format: bool) -> Result<QueryOutput> {
        let shape = if format { self.row_shape } else { RowShape::RawRecords };
        let rows = match self.query_rows(query, &[], shape) {
            Ok(rows) => rows,
            Err(err) => return self.handle_error(err),
        };

        let output = if format { normalize(rows) } else { QueryOutput::raw(rows) };
        self.finish(output, export, &format!("executed: {query}"))
    }

    /// Run a statement with bound parameters (`?1`, `?2`, ...).
    ///
    /// Same contract as [`Database::execute`] with formatting on, except
    /// that `params` are bound by the engine instead of spliced into the
    /// text.
    ///
    /// # Errors
    ///
    /// See [`Database::execute`].
    pub fn execute_with_params(
        &self,
        query: &str,
        params: &[Value],
        export: Option<&Path>,
    ) -> Result<QueryOutput> {
        let bound: Vec<&dyn ToSql> = params.iter().map(|v| v as &dyn ToSql).collect();
        let rows = match self.query_rows(query, &bound, self.row_shape) {
            Ok(rows) => rows,
            Err(err) => return self.handle_error(err),
        };

        self.finish(normalize(rows), export, &format!("executed: {query}"))
    }

    /// `select <items> from <table>`.
    ///
    /// # Errors
    ///
    /// See [`Database::execute`].
    pub fn fetch(&self, table: &str, items: &str, export: Option<&Path>) -> Result<QueryOutput> {
        let rows = match require_non_blank("table", table)
            .and_then(|()| self.query_rows(&format!("select {items} from {table}"), &[], self.row_shape))
        {
            Ok(rows) => rows,
            Err(err) => return self.handle_error(err),
        };

        self.finish(normalize(rows), export, &format!("fetched {items} from {table}"))
    }

    /// `select <items> from <table> where <condition>`.
    ///
    /// # Errors
    ///
    /// See [`Database::execute`].
    pub fn get(
        &self,
        table: &str,
        condition: &str,
        items: &str,
        export: Option<&Path>,
    ) -> Result<QueryOutput> {
        let sql = format!("select {items} from {table} where {condition}");
        let rows = match require_non_blank("table", table)
            .and_then(|()| self.query_rows(&sql, &[], self.row_shape))
        {
            Ok(rows) => rows,
            Err(err) => return self.handle_error(err),
        };

        self.finish(
            normalize(rows),
            export,
            &format!("fetched {items} from {table} where {condition}"),
        )
    }

    /// Run `insert into <table> values(<row>)` once per row, then commit.
    ///
    /// The batch is atomic: if any row fails, none of the batch is kept.
    ///
    /// # Errors
    ///
    /// See [`Database::execute`].
    pub fn insert<I>(&self, table: &str, rows: I) -> Result<QueryOutput>
    where
        I: IntoIterator,
        I::Item: SqlRow,
    {
        let count = match self.insert_rows(table, rows) {
            Ok(count) => count,
            Err(err) => return self.handle_error(err),
        };

        info!(table, rows = count, "insert committed");
        self.log(&format!("added {count} rows into {table}"))?;
        Ok(QueryOutput::Message(format!("query ok, {count} rows affected")))
    }

    /// `drop table <table>`.
    ///
    /// Runs in autocommit mode: SQLite commits the DDL on its own, so no
    /// explicit transaction is opened.
    ///
    /// # Errors
    ///
    /// See [`Database::execute`].
    pub fn drop(&self, table: &str) -> Result<QueryOutput> {
        let dropped = require_non_blank("table", table).and_then(|()| {
            let conn = self.connect()?;
            conn.execute(&format!("drop table {table}"), [])?;
            Ok(())
        });
        if let Err(err) = dropped {
            return self.handle_error(err);
        }

        info!(table, "table dropped");
        self.log(&format!("deleted table {table}"))?;
        Ok(QueryOutput::Message(format!("query ok, deleted table {table}")))
    }

    // ==================
    // Internals
    // ==================

    fn connect(&self) -> Result<Connection> {
        debug!(db = %self.path.display(), "opening connection");
        Ok(Connection::open(&self.path)?)
    }

    /// Run one statement and collect every row.
    fn query_rows(&self, sql: &str, params: &[&dyn ToSql], shape: RowShape) -> Result<Vec<Row>> {
        debug!(db = %self.path.display(), sql, "running statement");

        let mut conn = self.connect()?;
        let rows = if changes_data(sql) {
            let tx = conn.transaction()?;
            let rows = collect_rows(&tx, sql, params, shape)?;
            tx.commit()?;
            rows
        } else {
            let rows = collect_rows(&conn, sql, params, shape)?;
            // a verbatim `begin` or `savepoint` leaves a transaction open
            if !conn.is_autocommit() {
                conn.execute_batch("commit")?;
            }
            rows
        };

        debug!(rows = rows.len(), "statement committed");
        Ok(rows)
    }

    fn insert_rows<I>(&self, table: &str, rows: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: SqlRow,
    {
        require_non_blank("table", table)?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let mut count = 0;
        for row in rows {
            let sql = format!("insert into {table} values({})", row.sql_values());
            debug!(sql = %sql, "inserting row");
            tx.execute(&sql, [])?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// Log the failure, then raise it or turn it into an error value.
    fn handle_error(&self, err: Error) -> Result<QueryOutput> {
        warn!(db = %self.path.display(), error = %err, "query failed");
        self.log(&err.to_string())?;

        match self.error_policy() {
            ErrorPolicy::Raise => Err(err),
            ErrorPolicy::Return => Ok(QueryOutput::Error(err.to_string())),
        }
    }

    fn finish(&self, output: QueryOutput, export: Option<&Path>, event: &str) -> Result<QueryOutput> {
        if let Some(path) = export {
            append_text(path, &output.to_string())?;
            debug!(file = %path.display(), "result exported");
        }
        self.log(event)?;
        Ok(output)
    }

    pub(crate) fn log(&self, text: &str) -> Result<()> {
        match &self.log {
            Some(log) => log.record(text),
            None => Ok(()),
        }
    }
}

/// Whether `sql` starts with a data-changing keyword.
fn changes_data(sql: &str) -> bool {
    let keyword: String = sql
        .trim_start()
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .collect();
    ["insert", "update", "delete", "replace"]
        .iter()
        .any(|k| keyword.eq_ignore_ascii_case(k))
}

/// Prepare `sql` as a single statement and read back every row.
///
/// Empty or comment-only text yields no rows. A second statement after the
/// first is rejected before anything runs.
fn collect_rows(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
    shape: RowShape,
) -> Result<Vec<Row>> {
    let mut batch = Batch::new(conn, sql);
    let Some(mut stmt) = batch.next()? else {
        return Ok(Vec::new());
    };
    if batch.next()?.is_some() {
        return Err(Error::MultipleStatements);
    }

    let width = stmt.column_count();
    let mut rows = stmt.query(params)?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let values = (0..width)
            .map(|i| row.get_ref(i).map(Value::from))
            .collect::<rusqlite::Result<Vec<_>>>()?;
        out.push(Row::new(values, shape));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NO_RESULTS;
    use std::fs;
    use tempfile::TempDir;

    fn setup(options: Options) -> (TempDir, Database) {
        let dir = TempDir::new().unwrap();
        let db = Database::open(dir.path().join("test"), options).unwrap();
        db.execute("create table t (id integer, name text)", None, true)
            .unwrap();
        (dir, db)
    }

    fn log_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let dir = TempDir::new().unwrap();
        let db = Database::new(dir.path().join("test"));
        assert!(db.path().ends_with("test.sqlite"));
        assert!(db.name().ends_with("test"));
        assert!(!db.path().exists());

        let msg = db.create().unwrap();
        assert!(msg.starts_with("successfully initialised database under"));
        assert_eq!(fs::metadata(db.path()).unwrap().len(), 0);

        db.execute("create table t (id integer, name text)", None, true)
            .unwrap();
        let out = db.insert("t", [(1, "a"), (2, "b")]).unwrap();
        assert_eq!(out.to_string(), "query ok, 2 rows affected");

        let all = db.fetch("t", ALL_COLUMNS, None).unwrap();
        assert_eq!(all.to_string(), "[[1, 'a'], [2, 'b']]");

        let one = db.get("t", "id=1", ALL_COLUMNS, None).unwrap();
        assert_eq!(one.to_string(), "[1, 'a']");
        assert_eq!(
            one.into_rows(),
            vec![vec![Value::Integer(1), Value::from("a")]]
        );
    }

    #[test]
    fn test_create_is_idempotent() {
        let (_dir, db) = setup(Options::new());
        let size = fs::metadata(db.path()).unwrap().len();
        db.create().unwrap();
        assert_eq!(fs::metadata(db.path()).unwrap().len(), size);
    }

    #[test]
    fn test_raw_record_shape() {
        let (_dir, db) = setup(Options::new().with_row_shape(RowShape::RawRecords));
        db.insert("t", ["1, 'a'", "2, 'b'"]).unwrap();

        let out = db.fetch("t", ALL_COLUMNS, None).unwrap();
        assert_eq!(out.to_string(), "[(1, 'a'), (2, 'b')]");
    }

    #[test]
    fn test_fetch_roundtrip_matches_inserted() {
        let (_dir, db) = setup(Options::new());
        let rows = vec![
            vec![Value::Integer(7), Value::from("it's")],
            vec![Value::Integer(8), Value::Null],
            vec![Value::Integer(9), Value::from("z")],
        ];
        db.insert("t", &rows).unwrap();

        let fetched = db.fetch("t", ALL_COLUMNS, None).unwrap().into_rows();
        assert_eq!(fetched, rows);
    }

    #[test]
    fn test_infinite_real_survives_insert() {
        let (_dir, db) = setup(Options::new());
        db.execute("create table r (x real)", None, true).unwrap();
        db.insert("r", [(f64::INFINITY,), (f64::NEG_INFINITY,)]).unwrap();

        let out = db.fetch("r", "x", None).unwrap();
        assert_eq!(
            out,
            QueryOutput::Column(vec![
                Value::Real(f64::INFINITY),
                Value::Real(f64::NEG_INFINITY)
            ])
        );
    }

    #[test]
    fn test_single_column_results() {
        let (_dir, db) = setup(Options::new());
        db.insert("t", [(1, "a"), (2, "b")]).unwrap();

        let names = db.fetch("t", "name", None).unwrap();
        assert_eq!(names, QueryOutput::Column(vec![Value::from("a"), Value::from("b")]));

        let count = db.execute("select count(*) from t", None, true).unwrap();
        assert_eq!(count, QueryOutput::Value(Value::Integer(2)));
    }

    #[test]
    fn test_empty_result_sentinel() {
        let (_dir, db) = setup(Options::new());
        let out = db.fetch("t", ALL_COLUMNS, None).unwrap();
        assert_eq!(out.to_string(), NO_RESULTS);

        let out = db.get("t", "id = 99", ALL_COLUMNS, None).unwrap();
        assert!(out.is_empty_result());
    }

    #[test]
    fn test_unformatted_execute() {
        let (_dir, db) = setup(Options::new());
        db.insert("t", [(1, "a")]).unwrap();

        let out = db.execute("select * from t", None, false).unwrap();
        assert!(matches!(out, QueryOutput::Raw(_)));
        assert_eq!(out.to_string(), "[(1, 'a')]");

        let out = db.execute("select * from t where id = 5", None, false).unwrap();
        assert_eq!(out.to_string(), "[]");
    }

    #[test]
    fn test_execute_with_params() {
        let (_dir, db) = setup(Options::new());
        db.insert("t", [(1, "a")]).unwrap();

        let out = db
            .execute_with_params(
                "select name from t where id = ?1",
                &[Value::Integer(1)],
                None,
            )
            .unwrap();
        assert_eq!(out, QueryOutput::Value(Value::from("a")));

        db.execute_with_params(
            "insert into t values (?1, ?2)",
            &[Value::Integer(2), Value::from("x'); drop table t; --")],
            None,
        )
        .unwrap();
        let out = db.get("t", "id = 2", "name", None).unwrap();
        assert_eq!(out, QueryOutput::Value(Value::from("x'); drop table t; --")));
    }

    #[test]
    fn test_raise_policy_propagates() {
        let (_dir, db) = setup(Options::new());
        let err = db.execute("selec nonsense", None, true).unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert!(db.fetch("missing", ALL_COLUMNS, None).is_err());
    }

    #[test]
    fn test_return_policy_yields_sentinel() {
        let (_dir, db) = setup(Options::new().with_error_policy(ErrorPolicy::Return));

        let out = db.execute("selec nonsense", None, true).unwrap();
        assert!(out.is_error());
        assert!(out.to_string().starts_with("error: "));

        let out = db.fetch("missing", ALL_COLUMNS, None).unwrap();
        assert_eq!(out.to_string(), "error: no such table: missing");

        let out = db.drop("missing").unwrap();
        assert!(out.is_error());

        let out = db.insert("missing", ["1"]).unwrap();
        assert!(out.is_error());
    }

    #[test]
    fn test_failed_insert_batch_is_atomic() {
        let (_dir, db) = setup(Options::new().with_error_policy(ErrorPolicy::Return));
        db.execute("create unique index t_id on t (id)", None, true)
            .unwrap();

        let out = db.insert("t", ["1, 'a'", "2, 'b'", "1, 'dup'"]).unwrap();
        assert!(out.is_error());
        assert!(db.fetch("t", ALL_COLUMNS, None).unwrap().is_empty_result());

        let out = db.insert("t", ["1, 'a'", "2, 'b'"]).unwrap();
        assert_eq!(out.to_string(), "query ok, 2 rows affected");
    }

    #[test]
    fn test_failed_insert_batch_raises_and_keeps_nothing() {
        let (_dir, db) = setup(Options::new());
        db.execute("create unique index t_id on t (id)", None, true)
            .unwrap();

        let err = db.insert("t", [(1, "a"), (1, "dup")]).unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert!(db.fetch("t", ALL_COLUMNS, None).unwrap().is_empty_result());
    }

    #[test]
    fn test_second_statement_is_rejected() {
        let (_dir, db) = setup(Options::new());
        let query = "insert into t values (5, 'a'); insert into t values (6, 'b')";

        let err = db.execute(query, None, true).unwrap_err();
        assert!(matches!(err, Error::MultipleStatements));

        let mut db = db;
        db.enter_interactive();
        let out = db.execute(query, None, true).unwrap();
        assert_eq!(
            out.to_string(),
            "error: you can only execute one statement at a time"
        );

        let count = db.execute("select count(*) from t", None, true).unwrap();
        assert_eq!(count, QueryOutput::Value(Value::Integer(0)));

        // trailing separators and comments are not a second statement
        let out = db.execute("insert into t values (5, 'a'); -- done", None, true).unwrap();
        assert_eq!(out.to_string(), NO_RESULTS);
    }

    #[test]
    fn test_blank_and_comment_statements_have_no_results() {
        let (_dir, db) = setup(Options::new());
        for query in ["", "   ", "-- nothing here", "/* block */ ;"] {
            let out = db.execute(query, None, true).unwrap();
            assert_eq!(out.to_string(), NO_RESULTS, "query {query:?}");
        }
    }

    #[test]
    fn test_statements_that_need_autocommit() {
        let (_dir, db) = setup(Options::new());
        db.insert("t", [(1, "a")]).unwrap();

        let out = db.execute("vacuum", None, true).unwrap();
        assert_eq!(out.to_string(), NO_RESULTS);

        let out = db.execute("pragma journal_mode=wal", None, true).unwrap();
        assert_eq!(out, QueryOutput::Value(Value::from("wal")));

        db.execute("begin", None, true).unwrap();
        let out = db.execute("update t set name = 'b' where id = 1", None, true).unwrap();
        assert_eq!(out.to_string(), NO_RESULTS);
        let name = db.get("t", "id = 1", "name", None).unwrap();
        assert_eq!(name, QueryOutput::Value(Value::from("b")));
    }

    #[test]
    fn test_changes_data_keywords() {
        assert!(changes_data("  INSERT into t values (1)"));
        assert!(changes_data("delete from t"));
        assert!(!changes_data("select * from t"));
        assert!(!changes_data("vacuum"));
        assert!(!changes_data("inserted"));
    }

    #[test]
    fn test_export_failure_is_raised_under_return_policy() {
        let (dir, db) = setup(Options::new().with_error_policy(ErrorPolicy::Return));
        let result = db.fetch("t", ALL_COLUMNS, Some(dir.path()));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_drop_table() {
        let (_dir, db) = setup(Options::new());
        let out = db.drop("t").unwrap();
        assert_eq!(out.to_string(), "query ok, deleted table t");
        assert!(db.fetch("t", ALL_COLUMNS, None).is_err());
    }

    #[test]
    fn test_blank_table_is_rejected() {
        let (_dir, db) = setup(Options::new());
        assert!(matches!(
            db.fetch(" ", ALL_COLUMNS, None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_export_appends_stringified_result() {
        let (dir, db) = setup(Options::new());
        db.insert("t", [(1, "a"), (2, "b")]).unwrap();
        let export = dir.path().join("out.txt");

        db.fetch("t", ALL_COLUMNS, Some(&export)).unwrap();
        db.get("t", "id = 2", "name", Some(&export)).unwrap();

        assert_eq!(
            fs::read_to_string(&export).unwrap(),
            "[[1, 'a'], [2, 'b']]'b'"
        );
    }

    #[test]
    fn test_log_gets_one_line_per_operation() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("activity.log");
        let db = Database::open(
            dir.path().join("test"),
            Options::new()
                .with_error_policy(ErrorPolicy::Return)
                .with_log_path(&log),
        )
        .unwrap();

        db.create().unwrap();
        db.execute("create table t (id integer, name text)", None, true)
            .unwrap();
        db.insert("t", [(1, "a")]).unwrap();
        db.fetch("t", ALL_COLUMNS, None).unwrap();
        db.get("t", "id = 1", "name", None).unwrap();
        db.fetch("missing", ALL_COLUMNS, None).unwrap();
        db.drop("t").unwrap();

        assert_eq!(db.log_path(), Some(log.as_path()));
        let lines = log_lines(&log);
        assert_eq!(lines.len(), 7 + 1);
        assert!(lines[0].ends_with(" | database activated"));
        assert!(lines[1].contains(" | created database at "));
        assert!(lines[2].ends_with(" | executed: create table t (id integer, name text)"));
        assert!(lines[3].ends_with(" | added 1 rows into t"));
        assert!(lines[4].ends_with(" | fetched * from t"));
        assert!(lines[5].ends_with(" | fetched name from t where id = 1"));
        assert!(lines[6].ends_with(" | no such table: missing"));
        assert!(lines[7].ends_with(" | deleted table t"));
    }

    #[test]
    fn test_raised_errors_are_logged_too() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("activity.txt");
        let db = Database::open(dir.path().join("test"), Options::new().with_log_path(&log))
            .unwrap();

        assert!(db.fetch("missing", ALL_COLUMNS, None).is_err());

        let lines = log_lines(&log);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with(" | no such table: missing"));
    }

    #[test]
    fn test_bad_log_suffix_fails_under_both_policies() {
        let dir = TempDir::new().unwrap();
        for policy in [ErrorPolicy::Raise, ErrorPolicy::Return] {
            let result = Database::open(
                dir.path().join("test"),
                Options::new()
                    .with_error_policy(policy)
                    .with_log_path(dir.path().join("activity.csv")),
            );
            assert!(matches!(result, Err(Error::FileType { .. })));
        }
    }

    #[test]
    fn test_interactive_mode_is_one_way() {
        let (_dir, mut db) = setup(Options::new());
        assert_eq!(db.error_policy(), ErrorPolicy::Raise);

        db.enter_interactive();
        assert_eq!(db.mode(), Mode::Interactive);
        assert_eq!(db.error_policy(), ErrorPolicy::Return);
        assert!(db.execute("selec", None, true).unwrap().is_error());
    }
}
