//! Environment variable lookup.

use std::collections::HashMap;

/// Source of environment variables.
pub trait Environment: Send + Sync {
    /// Returns the value of `key`, or `None` when it is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
