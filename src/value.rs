//! Dynamic value representation for SQL formatting.
//!
//! This module provides the [`Value`] enum which represents any input the
//! quoting functions accept. One variant exists per coercion case, so
//! dispatch is an ordinary `match` instead of runtime type inspection; the
//! variant a value lands in decides how each coercer renders it.
//!
//! ## Core Types
//!
//! - [`Value`]: the input union (null, bool, number, string, timestamp,
//!   bytes, array, object)
//! - [`Number`]: integer or floating-point numeric values
//!
//! ## Creating Values
//!
//! ```rust
//! use pg_format::Value;
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let name = Value::from("tobi");
//! let absent = Value::from(None::<i64>);
//! assert!(absent.is_null());
//! ```
//!
//! Heterogeneous arrays are easiest to build with the
//! [`values!`](crate::values) macro:
//!
//! ```rust
//! use pg_format::{values, Value};
//!
//! let row = values!["abc", 1, true];
//! assert!(row.is_array());
//! ```
//!
//! ## Converting from Rust Types
//!
//! Any `T: Serialize` can be classified into a `Value` with
//! [`to_value`](crate::to_value):
//!
//! ```rust
//! use pg_format::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Row { a: i32, b: i32 }
//!
//! let value = to_value(&Row { a: 1, b: 2 }).unwrap();
//! assert!(value.is_object());
//! ```

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::SqlMap;

/// A dynamically-typed input value for the quoting functions.
///
/// Each variant maps to one case of the coercion rules: booleans render as
/// `t`/`f`, timestamps as UTC ISO text, byte buffers as hex, arrays
/// element-wise, objects as JSON. Anything without a dedicated variant is
/// carried as [`Value::String`] and rendered as plain text.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// An instant, always rendered in UTC with millisecond precision.
    Timestamp(DateTime<Utc>),
    /// Raw bytes, rendered in PostgreSQL `\x` hex form.
    Bytes(Vec<u8>),
    /// Ordered sequence; elements may themselves be arrays, which the
    /// literal and string coercions render as parenthesized groups.
    Array(Vec<Value>),
    /// Opaque key/value data, rendered only as JSON text.
    Object(SqlMap),
}

/// A numeric value, either integer or floating-point.
///
/// Non-finite floats display with the PostgreSQL spellings `Infinity`,
/// `-Infinity`, and `NaN`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Converts this number to an `i64` if it is an integer or a
    /// whole-number float in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(x) if x.is_nan() => write!(f, "NaN"),
            Number::Float(x) if x.is_infinite() => {
                write!(f, "{}", if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer-valued number, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&SqlMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a timestamp, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Timestamp(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            Value::Bytes(b) => serializer.collect_seq(b.iter()),
            Value::Array(arr) => serializer.collect_seq(arr.iter()),
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Value::Number(Number::Integer(value as i64))
        } else {
            Value::Number(Number::Float(value as f64))
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<SqlMap> for Value {
    fn from(value: SqlMap) -> Self {
        Value::Object(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Classifies a JSON value into the formatting union.
///
/// The checks run in a fixed priority order (null, bool, number, string,
/// array, object) so classification is deterministic.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(7i32)), Value::Number(Number::Integer(7)));
    }

    #[test]
    fn from_bytes_and_arrays() {
        assert_eq!(
            Value::from(vec![0xde_u8, 0xad]),
            Value::Bytes(vec![0xde, 0xad])
        );
        let arr = Value::from(vec![Value::from(1), Value::from(2)]);
        assert!(arr.is_array());
        assert_eq!(arr.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn large_u64_falls_back_to_float() {
        assert!(matches!(
            Value::from(u64::MAX),
            Value::Number(Number::Float(_))
        ));
        assert_eq!(Value::from(17u64), Value::Number(Number::Integer(17)));
    }

    #[test]
    fn number_display() {
        assert_eq!(Number::Integer(-15).to_string(), "-15");
        assert_eq!(Number::Float(45.13).to_string(), "45.13");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn from_json_classifies_in_priority_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"a":1,"b":[true,null],"c":"x"}"#).unwrap();
        let value = Value::from(json);
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::Number(Number::Integer(1))));
        assert_eq!(
            obj.get("b"),
            Some(&Value::Array(vec![Value::Bool(true), Value::Null]))
        );
        assert_eq!(obj.get("c"), Some(&Value::String("x".to_string())));
    }

    #[test]
    fn timestamp_accessor() {
        let ts = Utc.with_ymd_and_hms(2012, 12, 14, 13, 6, 43).unwrap();
        let value = Value::from(ts);
        assert_eq!(value.as_timestamp(), Some(&ts));
        assert!(value.as_str().is_none());
    }
}
