//! # pg-format
//!
//! Safe PostgreSQL SQL text formatting: `printf`-style templates with
//! `%I` (identifier), `%L` (literal), and `%s` (string) placeholders, plus
//! direct access to the underlying quoting functions.
//!
//! Identifiers and some value positions (table names, `VALUES` lists built
//! from arrays) cannot be bound as query parameters, so they end up spliced
//! into SQL text. This library does that splicing with the same quoting
//! rules the server itself uses, so the result is syntactically valid and
//! injection-safe.
//!
//! ## Key Features
//!
//! - **Identifier quoting**: bare where safe, double-quoted (with `""`
//!   escaping) where not, reserved words always quoted
//! - **Literal quoting**: single quotes doubled, escape-string syntax for
//!   backslashes, `NULL`, `::jsonb` casts for objects, `E'\\x…'` for bytes
//! - **Positional placeholders**: `%1$L` style 1-based positions, with a
//!   `%%` escape
//! - **Grouped lists**: arrays of arrays expand to `(a, b), (c, d)` row
//!   tuples
//! - **No I/O**: a pure string-to-string library; no client, no parser
//!
//! ## Quick Start
//!
//! ```rust
//! use pg_format::sql;
//!
//! let query = sql!(
//!     "select * from %I where author = %L",
//!     "user posts",
//!     "O'Reilly",
//! )
//! .unwrap();
//! assert_eq!(query, r#"select * from "user posts" where author = 'O''Reilly'"#);
//! ```
//!
//! ### Explicit argument slices
//!
//! ```rust
//! use pg_format::{format, Value};
//!
//! let args = vec![Value::from("events"), Value::from(10)];
//! let query = format("select * from %I limit %L", &args).unwrap();
//! assert_eq!(query, "select * from events limit '10'");
//! ```
//!
//! ### Direct quoting
//!
//! ```rust
//! use pg_format::{quote_ident, quote_literal, quote_string};
//!
//! assert_eq!(quote_ident("desc").unwrap(), "\"desc\"");
//! assert_eq!(quote_literal("Tobi's").unwrap(), "'Tobi''s'");
//! assert_eq!(quote_string(true).unwrap(), "t");
//! ```
//!
//! ### Custom placeholder markers
//!
//! ```rust
//! use pg_format::{Formatter, MarkerOverrides, Value};
//!
//! let mut fmt = Formatter::new();
//! fmt.configure(MarkerOverrides::new().literal('V'));
//! let out = fmt.format("insert into t values (%V)", &[Value::from(1)]).unwrap();
//! assert_eq!(out, "insert into t values ('1')");
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Every failure is a typed [`Error`]; nothing is silently truncated or
//!   substituted
//! - No global state: marker configuration lives in [`Formatter`]
//!   instances, so formatting is freely reentrant
//!
//! ## Format Reference
//!
//! The full placeholder grammar and coercion table live in [`syntax`].

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod quote;
pub mod reserved;
pub mod syntax;
pub mod template;
pub mod value;

pub use error::{Error, Result};
pub use map::SqlMap;
pub use options::{MarkerOverrides, Markers};
pub use template::Formatter;
pub use value::{Number, Value};

use serde::Serialize;

/// Expands a format template against an explicit argument slice.
///
/// Placeholders use the default `I`/`L`/`s` markers; build a [`Formatter`]
/// for custom ones. The [`sql!`] macro wraps this for inline arguments.
///
/// # Examples
///
/// ```rust
/// use pg_format::{format, Value};
///
/// let out = format("some %s here", &[Value::from("thing")]).unwrap();
/// assert_eq!(out, "some thing here");
/// ```
///
/// # Errors
///
/// Returns an error for a `0` position, a position past the end of `args`,
/// or a value the requested coercion rejects.
#[must_use = "this returns the formatted SQL, errors must be handled"]
pub fn format(template: &str, args: &[Value]) -> Result<String> {
    Formatter::new().format(template, args)
}

/// Quotes a value as a SQL identifier.
///
/// # Examples
///
/// ```rust
/// use pg_format::quote_ident;
///
/// assert_eq!(quote_ident("foo").unwrap(), "foo");
/// assert_eq!(quote_ident("foo bar").unwrap(), "\"foo bar\"");
/// ```
///
/// # Errors
///
/// Null, byte, object, and nested-array values have no identifier form.
#[must_use = "this returns the quoted identifier, errors must be handled"]
pub fn quote_ident<T: Into<Value>>(value: T) -> Result<String> {
    quote::ident(&value.into())
}

/// Quotes a value as a SQL literal.
///
/// # Examples
///
/// ```rust
/// use pg_format::{quote_literal, Value};
///
/// assert_eq!(quote_literal(42).unwrap(), "'42'");
/// assert_eq!(quote_literal(Value::Null).unwrap(), "NULL");
/// ```
#[must_use = "this returns the quoted literal, errors must be handled"]
pub fn quote_literal<T: Into<Value>>(value: T) -> Result<String> {
    quote::literal(&value.into())
}

/// Coerces a value to its bare, unquoted text form.
///
/// # Examples
///
/// ```rust
/// use pg_format::{quote_string, Value};
///
/// assert_eq!(quote_string("plain").unwrap(), "plain");
/// assert_eq!(quote_string(Value::Null).unwrap(), "");
/// ```
#[must_use = "this returns the coerced text, errors must be handled"]
pub fn quote_string<T: Into<Value>>(value: T) -> Result<String> {
    quote::string(&value.into())
}

/// Classifies any `T: Serialize` into a [`Value`].
///
/// Routes through JSON, so the result only contains the JSON-expressible
/// variants: a `chrono` timestamp arrives as its RFC 3339 *string*, not as
/// [`Value::Timestamp`]. Construct `Value::Timestamp` directly when SQL
/// timestamp rendering is wanted.
///
/// # Examples
///
/// ```rust
/// use pg_format::{quote_literal, to_value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(quote_literal(value).unwrap(), r#"'{"x":1,"y":2}'::jsonb"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Serialization`] if `value` fails to serialize.
#[must_use = "this returns the classified value, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    serde_json::to_value(value)
        .map(Value::from)
        .map_err(Error::serialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_and_macro_agree() {
        let from_slice = format("%L and %I", &[Value::from(1), Value::from("c")]).unwrap();
        let from_macro = crate::sql!("%L and %I", 1, "c").unwrap();
        assert_eq!(from_slice, from_macro);
        assert_eq!(from_slice, "'1' and c");
    }

    #[test]
    fn quoting_entry_points_accept_plain_values() {
        assert_eq!(quote_ident("ok").unwrap(), "ok");
        assert_eq!(quote_literal(false).unwrap(), "'f'");
        assert_eq!(quote_string(15).unwrap(), "15");
    }

    #[test]
    fn to_value_objects_render_as_jsonb() {
        use serde::Serialize;

        #[derive(Serialize)]
        struct Pair {
            a: i32,
            b: i32,
        }

        let value = to_value(&Pair { a: 1, b: 2 }).unwrap();
        assert_eq!(
            quote_literal(value).unwrap(),
            r#"'{"a":1,"b":2}'::jsonb"#
        );
    }

    #[test]
    fn formatting_is_pure() {
        let args = [Value::from("x'y")];
        let first = format("%L", &args).unwrap();
        let second = format("%L", &args).unwrap();
        assert_eq!(first, second);
    }
}
