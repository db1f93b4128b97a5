//! Error types for SQL text formatting.
//!
//! Every failure is immediate and total: a formatting call either returns the
//! fully expanded string or one [`Error`], never a partial result.
//!
//! ## Error Categories
//!
//! - **Invalid identifiers**: values that have no identifier form (null,
//!   binary data, objects, nested arrays)
//! - **Placeholder position errors**: explicit `%0$` positions, or positions
//!   past the end of the argument list
//! - **Serialization errors**: object values that cannot be rendered as JSON
//!
//! ## Examples
//!
//! ```rust
//! use pg_format::{format, Error, Value};
//!
//! let err = format("select %2$L", &[Value::from(1)]).unwrap_err();
//! assert!(matches!(err, Error::TooFewArguments { position: 2, count: 1 }));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while quoting values or
/// expanding a format template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value cannot be rendered as a SQL identifier.
    #[error("SQL identifier cannot be {0}")]
    InvalidIdentifier(&'static str),

    /// An explicit placeholder position of `0`. Positions are 1-based.
    #[error("specified argument 0 but argument positions start at 1")]
    BadPosition,

    /// A placeholder resolved to a position past the end of the argument
    /// list. `position` is the 1-based position the placeholder asked for.
    #[error("too few arguments: position {position} requested but only {count} supplied")]
    TooFewArguments { position: usize, count: usize },

    /// An object value could not be rendered as JSON text.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Creates a serialization error with a display message.
    pub fn serialization<T: std::fmt::Display>(msg: T) -> Self {
        Error::Serialization(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
