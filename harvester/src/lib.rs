//! Live configuration fields with thread-safe, observable values.
//!
//! Depend on this crate via `cargo add harvester`. It bundles the workspace
//! crates behind feature flags so the loader can be left out when only the
//! containers are needed.

#![warn(missing_docs, clippy::pedantic)]

/// Observable scalar containers (always enabled).
pub use harvest_sync as sync;

/// Seed, environment and flag loading (enabled by `config` feature).
#[cfg(feature = "config")]
pub use harvest_config as config;
