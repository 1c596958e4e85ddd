#![forbid(unsafe_code)]

use std::sync::Arc;

/// Storage type of a column.
///
/// `UInt8` is a one-byte discrete code type; the engine uses it for
/// change-classification columns rather than for computed values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    Str,
    UInt8,
}

/// A scalar cell value.
///
/// Validity is tracked separately per column; reading an invalid cell yields
/// `Value::Null`. Equality is plain variant equality (floats compare by
/// `f64` equality, so `NaN` is never equal to itself).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(Arc<str>),
    UInt8(u8),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The column type that stores this value, or `None` for `Null`.
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Value::Null => None,
            Value::Int(_) => Some(ColumnType::Int),
            Value::Float(_) => Some(ColumnType::Float),
            Value::Bool(_) => Some(ColumnType::Bool),
            Value::Str(_) => Some(ColumnType::Str),
            Value::UInt8(_) => Some(ColumnType::UInt8),
        }
    }
}
