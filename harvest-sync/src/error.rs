//! Error type for string assignment.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Result alias for parsing configuration text.
pub type ParseResult<T> = Result<T, ParseError>;

/// Text that does not match a scalar kind's canonical grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a recognised boolean literal.
    #[error("invalid bool `{input}`: expected one of 1, t, true, 0, f, false")]
    Bool {
        /// Rejected text.
        input: String,
    },

    /// The text is not a base-10 signed 64-bit integer.
    #[error("invalid int64 `{input}`: {source}")]
    Int64 {
        /// Rejected text.
        input: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The text is not a 64-bit floating point number.
    #[error("invalid float64 `{input}`: {source}")]
    Float64 {
        /// Rejected text.
        input: String,
        /// Underlying float parse failure.
        #[source]
        source: ParseFloatError,
    },
}

impl ParseError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::Bool { input } | Self::Int64 { input, .. } | Self::Float64 { input, .. } => input,
        }
    }

    /// Returns the name of the kind that rejected the text.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool { .. } => "bool",
            Self::Int64 { .. } => "int64",
            Self::Float64 { .. } => "float64",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_input_and_cause() {
        let source = "12x".parse::<i64>().unwrap_err();
        let err = ParseError::Int64 {
            input: "12x".into(),
            source,
        };

        assert_eq!(err.input(), "12x");
        assert_eq!(err.kind(), "int64");
        assert!(err.to_string().starts_with("invalid int64 `12x`: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn bool_error_has_no_source() {
        let err = ParseError::Bool {
            input: "yes".into(),
        };
        assert_eq!(err.kind(), "bool");
        assert!(std::error::Error::source(&err).is_none());
    }
}
