//! Error types for configuration loading.

use harvest_sync::ParseError;
use thiserror::Error;

use crate::Origin;

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors emitted while registering or loading fields.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source produced text the field's kind rejects.
    #[error("field `{field}`: invalid {origin} value: {source}")]
    Parse {
        /// Registered field name.
        field: String,
        /// Source that supplied the text.
        origin: Origin,
        /// Parse failure from the container.
        #[source]
        source: ParseError,
    },

    /// The command-line arguments did not match the registered flags.
    #[error("invalid command-line flags: {source}")]
    Flags {
        /// Parser error describing the unknown, malformed or incomplete flag.
        #[source]
        source: clap::Error,
    },

    /// A flag name cannot be used as a long command-line flag.
    #[error("invalid flag name `{flag}`")]
    InvalidFlag {
        /// Offending flag name.
        flag: String,
    },

    /// Two fields were registered with the same flag.
    #[error("flag `{flag}` of field `{field}` is already registered")]
    DuplicateFlag {
        /// Conflicting flag name.
        flag: String,
        /// Field whose registration was rejected.
        field: String,
    },

    /// Two fields were registered under the same name.
    #[error("field `{field}` is already registered")]
    DuplicateField {
        /// Conflicting field name.
        field: String,
    },
}
