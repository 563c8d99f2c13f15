//! Normalized query results.
//!
//! Raw results are a sequence of fixed-width rows. [`normalize`] collapses
//! them into the smallest shape that still holds the data:
//!
//! | rows | columns | output                         |
//! |------|---------|--------------------------------|
//! | 0    | any     | `Message("query ok, no results")` |
//! | 1    | 1       | `Value`                        |
//! | 1    | n       | `Row`                          |
//! | m    | 1       | `Column` (one scalar per row)  |
//! | m    | n       | `Rows`                         |
//!
//! The rules are lossy at the edges (a one-row select and a one-column
//! select over a single row look the same), which callers depend on.

use super::value::{Row, RowShape, Value, write_joined};
use serde::Serialize;
use std::fmt;

/// Success marker returned instead of an empty container.
pub const NO_RESULTS: &str = "query ok, no results";

/// Prefix of every failure sentinel produced under the return policy.
pub const ERROR_PREFIX: &str = "error: ";

/// What a query helper hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    /// Human-readable confirmation (`query ok, ...`, `successfully ...`).
    Message(String),
    /// A failure converted to a value; displays as `error: <message>`.
    Error(String),
    /// One row with one column.
    Value(Value),
    /// One row with several columns.
    Row(Row),
    /// Several rows with one column each.
    Column(Vec<Value>),
    /// Several rows with several columns.
    Rows(Vec<Row>),
    /// Unformatted rows, always presented as raw records.
    Raw(Vec<Row>),
}

impl QueryOutput {
    /// Returns true if this output is a failure sentinel.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The failure message without the `error: ` prefix.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Returns true for the empty-result success marker.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Message(msg) if msg == NO_RESULTS)
    }

    /// Wrap unformatted rows, forcing the raw-record shape.
    #[must_use]
    pub fn raw(rows: Vec<Row>) -> Self {
        Self::Raw(
            rows.into_iter()
                .map(|row| row.with_shape(RowShape::RawRecords))
                .collect(),
        )
    }

    /// Flatten back into rows of values, the inverse of [`normalize`] where
    /// the shape allows it. Messages and errors yield no rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<Value>> {
        match self {
            Self::Message(_) | Self::Error(_) => Vec::new(),
            Self::Value(value) => vec![vec![value]],
            Self::Row(row) => vec![row.into_values()],
            Self::Column(values) => values.into_iter().map(|v| vec![v]).collect(),
            Self::Rows(rows) | Self::Raw(rows) => rows.into_iter().map(Row::into_values).collect(),
        }
    }
}

/// Collapse raw rows into their normalized shape.
#[must_use]
pub fn normalize(rows: Vec<Row>) -> QueryOutput {
    // every row of one result has the same width
    let single_column = rows.first().is_some_and(|row| row.len() == 1);

    match rows.len() {
        0 => QueryOutput::Message(NO_RESULTS.to_string()),
        1 => {
            let row = rows.into_iter().next().map(|r| unwrap_single(r, single_column));
            row.unwrap_or_else(|| QueryOutput::Message(NO_RESULTS.to_string()))
        }
        _ if single_column => QueryOutput::Column(
            rows.into_iter()
                .filter_map(|row| row.into_values().into_iter().next())
                .collect(),
        ),
        _ => QueryOutput::Rows(rows),
    }
}

fn unwrap_single(row: Row, single_column: bool) -> QueryOutput {
    if single_column {
        if let Some(value) = row.values().first() {
            return QueryOutput::Value(value.clone());
        }
    }
    QueryOutput::Row(row)
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.write_str(msg),
            Self::Error(msg) => write!(f, "{ERROR_PREFIX}{msg}"),
            Self::Value(value) => write!(f, "{value}"),
            Self::Row(row) => write!(f, "{row}"),
            Self::Column(values) => {
                f.write_str("[")?;
                write_joined(f, values)?;
                f.write_str("]")
            }
            Self::Rows(rows) | Self::Raw(rows) => {
                f.write_str("[")?;
                write_joined(f, rows)?;
                f.write_str("]")
            }
        }
    }
}

impl Serialize for QueryOutput {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(_) | Self::Error(_) => serializer.serialize_str(&self.to_string()),
            Self::Value(value) => value.serialize(serializer),
            Self::Row(row) => row.serialize(serializer),
            Self::Column(values) => values.serialize(serializer),
            Self::Rows(rows) | Self::Raw(rows) => rows.serialize(serializer),
        }
    }
}
