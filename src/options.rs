//! Placeholder marker configuration.
//!
//! A placeholder is `%` followed by an optional `<digits>$` position and one
//! marker character. [`Markers`] holds the three marker characters — which
//! letter means identifier, which means literal, which means plain string —
//! defaulting to `I`, `L`, and `s`.
//!
//! Markers belong to a [`Formatter`](crate::Formatter) instance; there is no
//! process-wide configuration. Two formatters with different markers can
//! coexist in the same program.
//!
//! ## Examples
//!
//! ```rust
//! use pg_format::{Formatter, Markers, Value};
//!
//! let fmt = Formatter::with_markers(Markers::new().with_literal('V'));
//! let sql = fmt.format("select %V", &[Value::from("x")]).unwrap();
//! assert_eq!(sql, "select 'x'");
//! ```

/// The three placeholder marker characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    /// Marker for identifier placeholders. Default `I`.
    pub ident: char,
    /// Marker for literal placeholders. Default `L`.
    pub literal: char,
    /// Marker for unquoted-string placeholders. Default `s`.
    pub string: char,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            ident: 'I',
            literal: 'L',
            string: 's',
        }
    }
}

impl Markers {
    /// Creates the default markers (`I`, `L`, `s`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier marker.
    #[must_use]
    pub fn with_ident(mut self, marker: char) -> Self {
        self.ident = marker;
        self
    }

    /// Sets the literal marker.
    #[must_use]
    pub fn with_literal(mut self, marker: char) -> Self {
        self.literal = marker;
        self
    }

    /// Sets the string marker.
    #[must_use]
    pub fn with_string(mut self, marker: char) -> Self {
        self.string = marker;
        self
    }
}

/// Partial marker overrides for [`Formatter::configure`](crate::Formatter::configure).
///
/// Reconfiguration resets all three markers to their defaults first and then
/// applies the fields that are `Some`, so an override object only ever
/// describes deviations from the defaults, never from the previous
/// configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkerOverrides {
    pub ident: Option<char>,
    pub literal: Option<char>,
    pub string: Option<char>,
}

impl MarkerOverrides {
    /// Creates an empty override set (reconfiguring with it restores the
    /// defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the identifier marker.
    #[must_use]
    pub fn ident(mut self, marker: char) -> Self {
        self.ident = Some(marker);
        self
    }

    /// Overrides the literal marker.
    #[must_use]
    pub fn literal(mut self, marker: char) -> Self {
        self.literal = Some(marker);
        self
    }

    /// Overrides the string marker.
    #[must_use]
    pub fn string(mut self, marker: char) -> Self {
        self.string = Some(marker);
        self
    }

    /// Resolves the overrides against the defaults.
    pub(crate) fn resolve(self) -> Markers {
        let mut markers = Markers::default();
        if let Some(c) = self.ident {
            markers.ident = c;
        }
        if let Some(c) = self.literal {
            markers.literal = c;
        }
        if let Some(c) = self.string {
            markers.string = c;
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let markers = Markers::default();
        assert_eq!(markers.ident, 'I');
        assert_eq!(markers.literal, 'L');
        assert_eq!(markers.string, 's');
    }

    #[test]
    fn builder_overrides_one_marker() {
        let markers = Markers::new().with_string('t');
        assert_eq!(markers.string, 't');
        assert_eq!(markers.ident, 'I');
    }

    #[test]
    fn overrides_resolve_from_defaults() {
        let markers = MarkerOverrides::new().literal('V').resolve();
        assert_eq!(markers.literal, 'V');
        assert_eq!(markers.ident, 'I');
        assert_eq!(markers.string, 's');
    }

    #[test]
    fn empty_overrides_restore_defaults() {
        assert_eq!(MarkerOverrides::new().resolve(), Markers::default());
    }
}
