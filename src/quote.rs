//! Value coercion into SQL text.
//!
//! Three coercions, each with its own escaping rules:
//!
//! - [`ident`] renders a value as a SQL identifier (table/column name),
//!   double-quoting unless the text is a safe, unreserved name
//! - [`literal`] renders a value as a SQL literal, single-quoting with
//!   quote doubling and escape-string (`E'...'`) syntax where backslashes
//!   require it
//! - [`string`] renders a value as bare unquoted text
//!
//! The escaping loops follow PostgreSQL's own client-side quoting rules
//! (`PQescapeIdentifier` / `PQescapeLiteral`): embedded `"` doubles inside
//! identifiers, embedded `'` doubles inside literals, and a literal that
//! contains a backslash is emitted in escape-string syntax so the backslash
//! survives verbatim.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::reserved;
use crate::value::Value;

/// Renders a value as a SQL identifier.
///
/// Text that matches `[a-z_][a-z0-9_$]*` and is not a reserved word passes
/// through unquoted; everything else is double-quoted with embedded `"`
/// doubled. Booleans become `"t"`/`"f"`, timestamps their quoted UTC ISO
/// form, arrays a comma-joined list of identifiers.
///
/// Null, byte, object, and nested-array values have no identifier form and
/// fail with [`Error::InvalidIdentifier`].
///
/// # Examples
///
/// ```rust
/// use pg_format::quote_ident;
///
/// assert_eq!(quote_ident("users").unwrap(), "users");
/// assert_eq!(quote_ident("foo/bar").unwrap(), "\"foo/bar\"");
/// assert_eq!(quote_ident("desc").unwrap(), "\"desc\"");
/// ```
pub fn ident(value: &Value) -> Result<String> {
    match value {
        Value::Null => Err(Error::InvalidIdentifier("null")),
        Value::Bool(b) => Ok(format!("\"{}\"", if *b { "t" } else { "f" })),
        Value::Timestamp(ts) => Ok(format!("\"{}\"", format_timestamp(ts))),
        Value::Bytes(_) => Err(Error::InvalidIdentifier("binary data")),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if item.is_array() {
                    return Err(Error::InvalidIdentifier("a nested array"));
                }
                parts.push(ident(item)?);
            }
            Ok(parts.join(","))
        }
        Value::Object(_) => Err(Error::InvalidIdentifier("an object")),
        Value::Number(n) => Ok(ident_text(&n.to_string())),
        Value::String(s) => Ok(ident_text(s)),
    }
}

/// Renders a value as a SQL literal.
///
/// Null becomes the bare word `NULL`, booleans `'t'`/`'f'`, timestamps
/// their single-quoted UTC ISO form, bytes `E'\\x<hex>'`, objects
/// JSON text cast with `::jsonb`. Array elements are coerced one by one;
/// a nested array element is rendered as a parenthesized group, so an
/// array of arrays reads as SQL row tuples.
///
/// # Examples
///
/// ```rust
/// use pg_format::{quote_literal, values};
///
/// assert_eq!(quote_literal("Tobi's").unwrap(), "'Tobi''s'");
/// assert_eq!(
///     quote_literal(values![values![1, 2], values![3, 4]]).unwrap(),
///     "('1', '2'), ('3', '4')"
/// );
/// ```
pub fn literal(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::Bool(b) => Ok(if *b { "'t'" } else { "'f'" }.to_string()),
        Value::Timestamp(ts) => Ok(format!("'{}'", format_timestamp(ts))),
        Value::Bytes(bytes) => Ok(format!("E'\\\\x{}'", hex_encode(bytes))),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Array(inner) => parts.push(grouped_list(i != 0, inner, literal)?),
                    other => parts.push(literal(other)?),
                }
            }
            Ok(parts.join(","))
        }
        Value::Object(map) => {
            let json = serde_json::to_string(map).map_err(Error::serialization)?;
            Ok(format!("{}::jsonb", literal_text(&json)))
        }
        Value::Number(n) => Ok(literal_text(&n.to_string())),
        Value::String(s) => Ok(literal_text(s)),
    }
}

/// Renders a value as bare unquoted text.
///
/// Null becomes the empty string. Null array elements are skipped outright,
/// contributing neither text nor a separator. Nested array elements render
/// as parenthesized groups, as in [`literal`].
///
/// # Examples
///
/// ```rust
/// use pg_format::{quote_string, values, Value};
///
/// assert_eq!(quote_string(true).unwrap(), "t");
/// assert_eq!(
///     quote_string(values!["abc", Value::Null, 1]).unwrap(),
///     "abc,1"
/// );
/// ```
pub fn string(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(if *b { "t" } else { "f" }.to_string()),
        Value::Timestamp(ts) => Ok(format_timestamp(ts)),
        Value::Bytes(bytes) => Ok(format!("\\x{}", hex_encode(bytes))),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Null => {}
                    Value::Array(inner) => parts.push(grouped_list(i != 0, inner, string)?),
                    other => parts.push(string(other)?),
                }
            }
            Ok(parts.join(","))
        }
        Value::Object(map) => serde_json::to_string(map).map_err(Error::serialization),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
    }
}

/// Renders one nested array as a parenthesized, comma-separated group.
///
/// `lead_space` is set for every element except the first of the enclosing
/// sequence, so consecutive groups read `(1, 2), (3, 4)` once joined.
fn grouped_list<F>(lead_space: bool, values: &[Value], coerce: F) -> Result<String>
where
    F: Fn(&Value) -> Result<String>,
{
    let mut sql = String::from(if lead_space { " (" } else { "(" });
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&coerce(value)?);
    }
    sql.push(')');
    Ok(sql)
}

/// PostgreSQL renders timestamps with the date/time separator as a space
/// and UTC as `+00`, not `T`/`Z`.
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.3f+00").to_string()
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

fn ident_text(text: &str) -> String {
    if is_safe_ident(text) && !reserved::is_reserved(text) {
        return text.to_string();
    }
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        if ch == '"' {
            quoted.push_str("\"\"");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('"');
    quoted
}

/// The unquoted-identifier pattern: `[a-z_][a-z0-9_$]*`, case-sensitive.
/// Uppercase letters force quoting, preserving their case against
/// PostgreSQL's downcasing of bare identifiers.
fn is_safe_ident(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$')
}

/// Single-quotes `text`, doubling embedded `'` and `\`. A doubled backslash
/// only round-trips under escape-string syntax, so the presence of any
/// backslash promotes the whole literal to an `E'...'` string.
fn literal_text(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    let mut has_backslash = false;
    for ch in text.chars() {
        match ch {
            '\'' => quoted.push_str("''"),
            '\\' => {
                quoted.push_str("\\\\");
                has_backslash = true;
            }
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    if has_backslash {
        quoted.insert(0, 'E');
    }
    quoted
}
