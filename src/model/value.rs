//! Column values and rows as read back from SQLite.

use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, ValueRef};
use serde::Serialize;
use std::fmt;

/// Core value types for SQLite columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns true for SQL `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value as a SQL literal: `NULL`, `42`, `1.5`, `'it''s'`,
/// `X'00FF'`.
///
/// The same text is used when printing results and when a typed row is
/// spliced into an `insert` statement.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) if r.is_nan() => f.write_str("NULL"),
            // SQLite parses out-of-range literals as infinity
            Self::Real(r) if r.is_infinite() => {
                f.write_str(if r.is_sign_negative() { "-9e999" } else { "9e999" })
            }
            // Debug keeps the trailing `.0` so reals never read as integers
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Blob(bytes) => {
                f.write_str("X'")?;
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                f.write_str("'")
            }
        }
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(r) => Self::Real(r),
            ValueRef::Text(t) => Self::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Self::Blob(b.to_vec()),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Self::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Self::Real(r) => ToSqlOutput::Borrowed(ValueRef::Real(*r)),
            Self::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Self::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b.as_slice())),
        })
    }
}

macro_rules! value_from_integer {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::Integer(i64::from(value))
            }
        })*
    };
}

value_from_integer!(i8, i16, i32, i64, u8, u16, u32, bool);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Real(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// How a multi-column row is presented to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowShape {
    /// Rows as lists: `[1, 'a']`.
    #[default]
    Sequences,
    /// Rows as the engine's native records: `(1, 'a')`.
    RawRecords,
}

/// One fixed-width result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
    shape: RowShape,
}

impl Row {
    #[must_use]
    pub fn new(values: Vec<Value>, shape: RowShape) -> Self {
        Self { values, shape }
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub const fn shape(&self) -> RowShape {
        self.shape
    }

    /// Same values, presented with another shape.
    #[must_use]
    pub fn with_shape(self, shape: RowShape) -> Self {
        Self { shape, ..self }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.shape {
            RowShape::Sequences => ("[", "]"),
            RowShape::RawRecords => ("(", ")"),
        };
        f.write_str(open)?;
        write_joined(f, &self.values)?;
        f.write_str(close)
    }
}

impl Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

/// Write `items` separated by `, `.
pub(crate) fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Something that can be spliced into `insert into <table> values(...)`.
///
/// Plain strings are interpolated verbatim, exactly as written by the
/// caller. Typed rows render each value as a SQL literal. Neither form is
/// safe for untrusted input.
pub trait SqlRow {
    /// The text placed between the parentheses of `values(...)`.
    fn sql_values(&self) -> String;
}

impl SqlRow for str {
    fn sql_values(&self) -> String {
        self.to_string()
    }
}

impl SqlRow for String {
    fn sql_values(&self) -> String {
        self.clone()
    }
}

impl SqlRow for [Value] {
    fn sql_values(&self) -> String {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl SqlRow for Vec<Value> {
    fn sql_values(&self) -> String {
        self.as_slice().sql_values()
    }
}

impl SqlRow for Row {
    fn sql_values(&self) -> String {
        self.values.sql_values()
    }
}

impl<T: SqlRow + ?Sized> SqlRow for &T {
    fn sql_values(&self) -> String {
        (**self).sql_values()
    }
}

macro_rules! sql_row_tuple {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: Clone + Into<Value>),+> SqlRow for ($($ty,)+) {
            fn sql_values(&self) -> String {
                let ($($var,)+) = self.clone();
                vec![$($var.into()),+].sql_values()
            }
        }
    };
}

sql_row_tuple!(A a);
sql_row_tuple!(A a, B b);
sql_row_tuple!(A a, B b, C c);
sql_row_tuple!(A a, B b, C c, D d);
sql_row_tuple!(A a, B b, C c, D d, E e);
sql_row_tuple!(A a, B b, C c, D d, E e, F f);
sql_row_tuple!(A a, B b, C c, D d, E e, F f, G g);
sql_row_tuple!(A a, B b, C c, D d, E e, F f, G g, H h);
