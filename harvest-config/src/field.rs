//! Type-erased access to configuration containers.

use harvest_sync::{ParseResult, ScalarKind, Synced};

/// Object-safe view of a [`Synced`] container used by loaders.
pub trait Field: Send + Sync {
    /// Kind name of the underlying container.
    fn kind(&self) -> &'static str;

    /// Parses and stores `input`.
    ///
    /// # Errors
    ///
    /// Returns the container's parse error; the value is left untouched.
    fn set_string(&self, input: &str) -> ParseResult<()>;

    /// Redaction-aware rendering of the current value.
    fn render(&self) -> String;

    /// Whether [`render`](Self::render) hides the value.
    fn redacted(&self) -> bool;

    /// Whether the field's flag may be given without a value, meaning `true`.
    fn is_switch(&self) -> bool;
}

impl<K: ScalarKind> Field for Synced<K> {
    fn kind(&self) -> &'static str {
        K::NAME
    }

    fn set_string(&self, input: &str) -> ParseResult<()> {
        Synced::set_string(self, input)
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn redacted(&self) -> bool {
        K::REDACTED
    }

    fn is_switch(&self) -> bool {
        K::IS_SWITCH
    }
}
