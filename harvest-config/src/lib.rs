//! Loading configuration fields from seed literals, environment variables and
//! command-line flags.
//!
//! Fields are registered explicitly as [`FieldSpec`]s; the [`Loader`] applies
//! every configured source in order (seed, then env, then flag) through the
//! field's string assignment, so live listeners observe each applied value.

#![warn(missing_docs, clippy::pedantic)]

mod env;
mod error;
mod field;
mod loader;

/// Environment variable lookup.
pub use env::{Environment, ProcessEnv};
/// Error type and result alias for loading.
pub use error::{ConfigError, ConfigResult};
/// Type-erased view over a configuration container.
pub use field::Field;
/// Field registration and source application.
pub use loader::{FieldSpec, Loader, Origin};
