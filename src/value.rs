use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::{Error, Result};

/// A raw column value as read from, or written to, the relational engine.
///
/// This is the currency both sides of the bridge trade in: result rows hand
/// these to field containers, and field containers hand them back on the
/// write path.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Double-precision float
    F64(f64),

    /// Arbitrary-precision decimal
    Decimal(Decimal),

    /// String value
    String(String),

    /// Raw byte sequence
    Bytes(Vec<u8>),

    /// A civil date without a time component
    Date(NaiveDate),

    /// A zoned instant, as application code produces it
    Zoned(DateTime<Utc>),

    /// A SQL timestamp, as drivers read and write it
    Timestamp(NaiveDateTime),

    /// A string-backed enumeration value
    Enum(String),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns a `Value` representing null.
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the contained type, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Zoned(_) => "zoned date-time",
            Self::Timestamp(_) => "timestamp",
            Self::Enum(_) => "enum value",
            Self::Null => "null",
        }
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            other => Err(conversion(&other, "bool")),
        }
    }

    pub fn to_i32(self) -> Result<i32> {
        match self {
            Self::I32(v) => Ok(v),
            other => Err(conversion(&other, "i32")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            other => Err(conversion(&other, "string")),
        }
    }

    pub fn to_timestamp(self) -> Result<NaiveDateTime> {
        match self {
            Self::Timestamp(v) => Ok(v),
            other => Err(conversion(&other, "timestamp")),
        }
    }

    /// Normalizes calendar values to a SQL timestamp.
    ///
    /// Dates become midnight timestamps, zoned instants are flattened to
    /// UTC. Every other value passes through unchanged. This is what the
    /// column write path applies before handing a value to the engine.
    pub fn into_sql_timestamp(self) -> Self {
        match self {
            Self::Date(date) => Self::Timestamp(date.and_time(NaiveTime::MIN)),
            Self::Zoned(at) => Self::Timestamp(at.naive_utc()),
            other => other,
        }
    }
}

fn conversion(value: &Value, expected: &'static str) -> Error {
    Error::TypeConversion {
        found: value.type_name(),
        expected,
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<Decimal> for Value {
    fn from(src: Decimal) -> Self {
        Self::Decimal(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::Timestamp(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::Zoned(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
