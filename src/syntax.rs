//! Format String Syntax
//!
//! This module documents the template syntax and quoting rules implemented
//! by this library.
//!
//! # Placeholders
//!
//! A placeholder is `%` followed by an optional explicit position and one
//! marker character:
//!
//! ```text
//! %[<digits>$]<marker>
//! ```
//!
//! With the default markers:
//!
//! | Form | Meaning | Example output for `"it's"` |
//! |------|---------|------------------------------|
//! | `%I` | identifier quoting | `"it's"` |
//! | `%L` | literal quoting | `'it''s'` |
//! | `%s` | bare string | `it's` |
//! | `%%` | a literal percent sign | `%` |
//!
//! A `%` that does not begin a complete placeholder passes through
//! unchanged: `100%`, `%x`, and `%1$%` all appear verbatim in the output.
//!
//! ## Positions
//!
//! Explicit positions are 1-based: `%1$s` is the first argument. Position
//! `0` is an error, as is any position past the end of the argument list —
//! positions are never clamped.
//!
//! Unpositioned placeholders use an implicit cursor that continues from the
//! last *resolved* position, not from the placeholder's own place in the
//! template:
//!
//! ```rust
//! use pg_format::sql;
//!
//! // %s follows the explicit %2$..., so it takes argument 3.
//! let out = sql!("%2$s %s", "a", "b", "c").unwrap();
//! assert_eq!(out, "b c");
//! ```
//!
//! `%%` consumes no argument and leaves the cursor where it was.
//!
//! ## Custom markers
//!
//! The three marker characters are per-[`Formatter`](crate::Formatter)
//! configuration; see [`options`](crate::options).
//!
//! # Value Coercion
//!
//! | Input | `%I` identifier | `%L` literal | `%s` string |
//! |-------|-----------------|--------------|-------------|
//! | null | error | `NULL` | empty |
//! | `true` / `false` | `"t"` / `"f"` | `'t'` / `'f'` | `t` / `f` |
//! | number | quoted unless safe | `'42'` | `42` |
//! | text | quoted unless safe | `'...'` | as-is |
//! | timestamp | `"2012-12-14 13:06:43.152+00"` | `'2012-12-14 13:06:43.152+00'` | unquoted |
//! | bytes | error | `E'\\xdeadbeef'` | `\xdeadbeef` |
//! | array | elements joined with `,` | elements joined with `,` | nulls skipped, joined with `,` |
//! | nested array | error | `(a, b), (c, d)` groups | `(a, b), (c, d)` groups |
//! | object | error | `'{"a":1}'::jsonb` | `{"a":1}` |
//!
//! # Quoting Rules
//!
//! **Identifiers.** Text matching `[a-z_][a-z0-9_$]*` that is not a
//! reserved word (see [`reserved`](crate::reserved)) passes through bare.
//! Everything else is wrapped in double quotes with embedded `"` doubled.
//! The pattern is deliberately lowercase-only: a bare uppercase identifier
//! would be silently downcased by the server, so mixed-case names are
//! always quoted.
//!
//! **Literals.** Values are wrapped in single quotes with embedded `'`
//! doubled. A backslash doubles as well and switches the literal to
//! escape-string syntax (`E'...'`), where doubled backslashes decode back
//! to single ones. Timestamps always render in UTC, date and time separated
//! by a space, zone as `+00`, with millisecond precision.
//!
//! **Grouped lists.** An array nested inside an array renders as a
//! parenthesized tuple; consecutive tuples are separated by `, ` so that an
//! array of arrays expands to SQL row syntax:
//!
//! ```rust
//! use pg_format::sql;
//!
//! let out = sql!(
//!     "insert into pairs values %L",
//!     pg_format::values![pg_format::values![1, 2], pg_format::values![3, 4]]
//! )
//! .unwrap();
//! assert_eq!(out, "insert into pairs values ('1', '2'), ('3', '4')");
//! ```

// This module contains only documentation; no implementation code
