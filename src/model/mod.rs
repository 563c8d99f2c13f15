//! Data types for query results.
//!
//! - [`value`] - column values, rows, and row shapes
//! - [`output`] - the normalized result handed back by every query helper

mod output;
mod value;

pub use output::{normalize, QueryOutput, ERROR_PREFIX, NO_RESULTS};
pub use value::{Row, RowShape, SqlRow, Value};
