//! Observable scalar containers for live configuration.
//!
//! Every configuration field is backed by one [`Synced`] container. A container
//! can be read and written concurrently and forwards each write, in order, to at
//! most one [`Subscriber`].
//!
//! # Blocking on notification
//!
//! [`Synced::set`] hands the new value to the subscriber while still holding the
//! container's write lock. A bounded queue that is full and not being drained
//! stalls the writer, and with it every other reader and writer of that
//! container. Size queues for the expected burst of updates, or start the
//! consuming loop before the first write. A rendezvous queue (capacity zero)
//! whose receiver is never polled blocks the writer forever.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod kind;
mod subscriber;
mod value;

/// Parse failures raised by string assignment.
pub use error::{ParseError, ParseResult};
/// Scalar kinds and their parse/format strategies.
pub use kind::{
    BoolKind, Float64Kind, Int64Kind, REDACTION_MARKER, ScalarKind, SecretKind, TextKind,
};
/// Hand-off queues that receive change notifications.
pub use subscriber::{Subscriber, SubscriberClosed};
/// The container and its per-kind aliases.
pub use value::{Bool, Float64, Int64, Secret, Synced, Text};
