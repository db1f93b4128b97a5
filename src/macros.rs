/// Expands a format template with inline arguments.
///
/// The macro counterpart of [`format`](crate::format): each argument is
/// converted with [`Value::from`](crate::Value) and the whole list is passed
/// as the argument slice.
///
/// # Examples
///
/// ```rust
/// use pg_format::sql;
///
/// let query = sql!("select %I from %I where name = %L", "id", "users", "Tobi's").unwrap();
/// assert_eq!(query, "select id from users where name = 'Tobi''s'");
/// ```
#[macro_export]
macro_rules! sql {
    ($template:expr) => {
        $crate::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),+])
    };
}

/// Builds a [`Value::Array`](crate::Value) from heterogeneous elements.
///
/// Each element is converted with [`Value::from`](crate::Value), so plain
/// literals and nested `values!` calls mix freely.
///
/// # Examples
///
/// ```rust
/// use pg_format::{quote_literal, values};
///
/// let rows = values![values![1, "a"], values![2, "b"]];
/// assert_eq!(quote_literal(rows).unwrap(), "('1', 'a'), ('2', 'b')");
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::Value::Array(Vec::new())
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Value::Array(vec![$($crate::Value::from($elem)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value};

    #[test]
    fn sql_macro_with_no_arguments() {
        assert_eq!(crate::sql!("select 1").unwrap(), "select 1");
    }

    #[test]
    fn sql_macro_converts_arguments() {
        let out = crate::sql!("%s %s %s", 1, true, "x").unwrap();
        assert_eq!(out, "1 t x");
    }

    #[test]
    fn values_macro_builds_arrays() {
        assert_eq!(values!(), Value::Array(vec![]));
        let arr = values![1, "two", false];
        assert_eq!(
            arr,
            Value::Array(vec![
                Value::Number(Number::Integer(1)),
                Value::String("two".to_string()),
                Value::Bool(false),
            ])
        );
    }

    #[test]
    fn values_macro_nests() {
        let nested = values![values![1, 2], values![3, 4]];
        match nested {
            Value::Array(outer) => {
                assert_eq!(outer.len(), 2);
                assert!(outer.iter().all(Value::is_array));
            }
            _ => panic!("expected array"),
        }
    }
}
