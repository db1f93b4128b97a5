//! Property-based tests for the quoting invariants that matter for
//! injection safety, checked across generated inputs.

use proptest::prelude::*;
use pg_format::{format, quote_ident, quote_literal, quote_string, Value};

/// Strips the optional escape-string prefix and the outer quotes of a
/// literal, returning the inner text.
fn literal_body(quoted: &str) -> &str {
    let quoted = quoted.strip_prefix('E').unwrap_or(quoted);
    quoted
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .expect("literal should be wrapped in single quotes")
}

proptest! {
    // Every text literal is wrapped in single quotes and contains no lone
    // single quote inside; decoding the body restores the input.
    #[test]
    fn prop_literal_escapes_round_trip(s in ".*") {
        let quoted = quote_literal(s.as_str()).unwrap();
        let body = literal_body(&quoted);
        prop_assert!(!body.replace("''", "").contains('\''));

        let decoded = body.replace("''", "'");
        let decoded = if quoted.starts_with('E') {
            decoded.replace("\\\\", "\\")
        } else {
            decoded
        };
        prop_assert_eq!(decoded, s);
    }

    // Backslash-bearing literals always carry the escape-string prefix.
    #[test]
    fn prop_backslash_forces_escape_syntax(s in ".*") {
        let quoted = quote_literal(s.as_str()).unwrap();
        prop_assert_eq!(s.contains('\\'), quoted.starts_with('E'));
    }

    // An identifier either comes back verbatim (safe and unreserved) or
    // double-quoted with inner quotes doubled.
    #[test]
    fn prop_ident_is_verbatim_or_quoted(s in ".*") {
        let quoted = quote_ident(s.as_str()).unwrap();
        if quoted == s {
            prop_assert!(s.starts_with(|c: char| c.is_ascii_lowercase() || c == '_'));
        } else {
            let body = quoted
                .strip_prefix('"')
                .and_then(|q| q.strip_suffix('"'))
                .expect("quoted identifier should be wrapped in double quotes");
            prop_assert!(!body.replace("\"\"", "").contains('"'));
            prop_assert_eq!(body.replace("\"\"", "\""), s);
        }
    }

    // The string coercion of text is the identity.
    #[test]
    fn prop_string_of_text_is_identity(s in ".*") {
        prop_assert_eq!(quote_string(s.as_str()).unwrap(), s);
    }

    // Coercers are pure functions of their input.
    #[test]
    fn prop_coercion_is_deterministic(s in ".*") {
        let value = Value::from(s.as_str());
        prop_assert_eq!(quote_literal(&value).unwrap(), quote_literal(&value).unwrap());
        prop_assert_eq!(quote_ident(&value).unwrap(), quote_ident(&value).unwrap());
    }

    // A template with no percent signs expands to itself, whatever the
    // arguments.
    #[test]
    fn prop_percent_free_templates_pass_through(
        s in "[^%]*",
        n in any::<i64>(),
    ) {
        let out = format(&s, &[Value::from(n)]).unwrap();
        prop_assert_eq!(out, s);
    }

    // Integer literals always render as the number wrapped in quotes.
    #[test]
    fn prop_integer_literals_are_their_text(n in any::<i64>()) {
        let quoted = quote_literal(n).unwrap();
        prop_assert_eq!(quoted, std::format!("'{n}'"));
    }
}
