//! Template expansion.
//!
//! This module provides the [`Formatter`] that scans a format string for
//! `%`-placeholders and substitutes quoted arguments.
//!
//! ## Overview
//!
//! A placeholder is `%` followed by an optional explicit position
//! (`<digits>$`, 1-based) and one configured marker character; `%%` emits a
//! bare `%`. Anything after `%` that does not complete a placeholder passes
//! through unchanged. The scanner is hand-written and walks the template
//! once, left to right.
//!
//! ## Usage
//!
//! Most callers use [`format`](crate::format) or the
//! [`sql!`](crate::sql) macro. A `Formatter` is only needed for custom
//! marker characters:
//!
//! ```rust
//! use pg_format::{Formatter, MarkerOverrides, Value};
//!
//! let mut fmt = Formatter::new();
//! fmt.configure(MarkerOverrides::new().string('t'));
//! let out = fmt.format("hello %t", &[Value::from("world")]).unwrap();
//! assert_eq!(out, "hello world");
//! ```

use crate::error::{Error, Result};
use crate::options::{MarkerOverrides, Markers};
use crate::quote;
use crate::value::Value;

/// Which coercion a placeholder requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Ident,
    Literal,
    String,
}

/// One parsed template occurrence: the `%%` escape, or an argument
/// placeholder with an optional explicit 1-based position.
#[derive(Clone, Copy, Debug)]
enum Token {
    Escape,
    Placeholder { position: Option<usize>, kind: Kind },
}

/// Expands format templates against a set of marker characters.
///
/// Stateless across calls: the implicit-argument cursor lives and dies
/// inside one [`format`](Formatter::format) call, so a formatter can be
/// shared freely by reference.
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter {
    markers: Markers,
}

impl Formatter {
    /// Creates a formatter with the default `I`/`L`/`s` markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with explicit markers.
    #[must_use]
    pub fn with_markers(markers: Markers) -> Self {
        Formatter { markers }
    }

    /// Returns the current markers.
    #[must_use]
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Reconfigures the markers: all three reset to their defaults, then the
    /// supplied overrides apply.
    pub fn configure(&mut self, overrides: MarkerOverrides) {
        self.markers = overrides.resolve();
    }

    /// Expands `template`, substituting each placeholder with the matching
    /// coercion of its argument.
    ///
    /// Unpositioned placeholders continue from the last resolved position:
    /// after any placeholder resolves to argument `n`, the next implicit
    /// placeholder takes argument `n + 1`, whether `n` was reached
    /// implicitly or by an explicit `<digits>$` prefix.
    ///
    /// # Errors
    ///
    /// [`Error::BadPosition`] for an explicit position of `0`,
    /// [`Error::TooFewArguments`] when a placeholder resolves past the end
    /// of `args`, and any error from the identifier coercion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_format::{Formatter, Value};
    ///
    /// let fmt = Formatter::new();
    /// let sql = fmt
    ///     .format("insert into %I values (%L, %L)", &[
    ///         Value::from("user log"),
    ///         Value::from(7),
    ///         Value::from("it's done"),
    ///     ])
    ///     .unwrap();
    /// assert_eq!(sql, "insert into \"user log\" values ('7', 'it''s done')");
    /// ```
    pub fn format(&self, template: &str, args: &[Value]) -> Result<String> {
        let mut out = String::with_capacity(template.len() + template.len() / 4);
        let mut cursor = 0usize;
        let mut rest = template;

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            match self.scan_token(after) {
                Some((Token::Escape, consumed)) => {
                    out.push('%');
                    rest = &after[consumed..];
                }
                Some((Token::Placeholder { position, kind }, consumed)) => {
                    let index = match position {
                        Some(0) => return Err(Error::BadPosition),
                        Some(p) => p - 1,
                        None => cursor,
                    };
                    if index >= args.len() {
                        return Err(Error::TooFewArguments {
                            position: index.saturating_add(1),
                            count: args.len(),
                        });
                    }
                    cursor = index + 1;
                    let piece = match kind {
                        Kind::Ident => quote::ident(&args[index])?,
                        Kind::Literal => quote::literal(&args[index])?,
                        Kind::String => quote::string(&args[index])?,
                    };
                    out.push_str(&piece);
                    rest = &after[consumed..];
                }
                None => {
                    // Not a placeholder; the % stands for itself.
                    out.push('%');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Tries to read one token at the start of `input` (the text just after
    /// a `%`). Returns the token and how many bytes it consumed, or `None`
    /// if nothing placeholder-shaped starts here.
    fn scan_token(&self, input: &str) -> Option<(Token, usize)> {
        let first = input.chars().next()?;
        if first == '%' {
            return Some((Token::Escape, 1));
        }

        // Explicit position: digits, then '$', then a marker.
        if first.is_ascii_digit() {
            let digits_end = input
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(input.len());
            let tail = &input[digits_end..];
            let mut tail_chars = tail.chars();
            if tail_chars.next() == Some('$') {
                if let Some(marker) = tail_chars.next() {
                    if let Some(kind) = self.kind_of(marker) {
                        // Overflow puts the position past any argument
                        // count; usize::MAX reports as too-few-arguments.
                        let position =
                            input[..digits_end].parse::<usize>().unwrap_or(usize::MAX);
                        let consumed = digits_end + 1 + marker.len_utf8();
                        return Some((
                            Token::Placeholder {
                                position: Some(position),
                                kind,
                            },
                            consumed,
                        ));
                    }
                }
            }
            // Fall through: a digit can still be a configured marker.
        }

        let kind = self.kind_of(first)?;
        Some((
            Token::Placeholder {
                position: None,
                kind,
            },
            first.len_utf8(),
        ))
    }

    /// Marker dispatch, ident first: if two markers share a character the
    /// ident meaning wins.
    fn kind_of(&self, c: char) -> Option<Kind> {
        if c == self.markers.ident {
            Some(Kind::Ident)
        } else if c == self.markers.literal {
            Some(Kind::Literal)
        } else if c == self.markers.string {
            Some(Kind::String)
        } else {
            None
        }
    }
}
