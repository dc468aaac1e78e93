//! The observable scalar container.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;
use std::sync::mpsc;

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace, warn};

use crate::kind::{
    BoolKind, Float64Kind, Int64Kind, REDACTION_MARKER, ScalarKind, SecretKind, TextKind,
};
use crate::{ParseError, ParseResult, Subscriber};

/// Boolean configuration value.
pub type Bool = Synced<BoolKind>;
/// Signed 64-bit integer configuration value.
pub type Int64 = Synced<Int64Kind>;
/// 64-bit floating point configuration value.
pub type Float64 = Synced<Float64Kind>;
/// String configuration value.
pub type Text = Synced<TextKind>;
/// String configuration value that is never rendered in clear text.
pub type Secret = Synced<SecretKind>;

struct Inner<T> {
    value: T,
    subscriber: Option<Box<dyn Subscriber<T>>>,
}

/// Thread-safe holder for one configuration value with a single change listener.
///
/// Writes are totally ordered by an exclusive lock, and the installed
/// [`Subscriber`] receives every written value in that order. Delivery happens
/// inside the write lock: see the crate docs for the blocking consequences.
pub struct Synced<K: ScalarKind> {
    inner: RwLock<Inner<K::Value>>,
}

impl<K: ScalarKind> Synced<K> {
    /// Creates a container holding `value`, with no subscriber.
    #[must_use]
    pub fn new(value: K::Value) -> Self {
        Self {
            inner: RwLock::new(Inner {
                value,
                subscriber: None,
            }),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn get(&self) -> K::Value {
        self.inner.read().value.clone()
    }

    /// Stores `value` and hands it to the subscriber, if any.
    ///
    /// Blocks while a bounded subscriber queue is full; the write lock is held
    /// for the whole hand-off. A subscriber whose receiver has been dropped is
    /// detached and the write still takes effect.
    pub fn set(&self, value: K::Value) {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let closed = match &inner.subscriber {
            Some(subscriber) => {
                inner.value = value.clone();
                subscriber.deliver(value).is_err()
            }
            None => {
                inner.value = value;
                false
            }
        };

        if closed {
            inner.subscriber = None;
            warn!(kind = K::NAME, "subscriber queue closed; listener detached");
        }
        trace!(kind = K::NAME, "value updated");
    }

    /// Parses `input` with the kind's grammar and stores the result via [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when `input` is rejected; the stored value is left
    /// untouched and the subscriber is not notified.
    pub fn set_string(&self, input: &str) -> ParseResult<()> {
        let value = K::parse(input)?;
        self.set(value);
        Ok(())
    }

    /// Installs `subscriber` as the sole listener, replacing any previous one.
    ///
    /// The current value is not delivered; only later writes are.
    pub fn listen<S>(&self, subscriber: S)
    where
        S: Subscriber<K::Value> + 'static,
    {
        let mut inner = self.inner.write();
        if inner.subscriber.replace(Box::new(subscriber)).is_some() {
            debug!(kind = K::NAME, "replaced existing subscriber");
        }
    }

    /// Installs a bounded queue of `capacity` as the listener and returns its
    /// receiving end.
    ///
    /// A capacity of zero makes every write wait for the receiver.
    #[must_use]
    pub fn subscribe(&self, capacity: usize) -> mpsc::Receiver<K::Value> {
        let (tx, rx) = mpsc::sync_channel(capacity);
        self.listen(tx);
        rx
    }

    /// Returns `true` while a subscriber is installed.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.inner.read().subscriber.is_some()
    }
}

impl<K: ScalarKind> Default for Synced<K> {
    fn default() -> Self {
        Self::new(K::Value::default())
    }
}

impl<K: ScalarKind> Display for Synced<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if K::REDACTED {
            return f.pad(REDACTION_MARKER);
        }
        let inner = self.inner.read();
        K::render(&inner.value, f)
    }
}

impl<K: ScalarKind> Debug for Synced<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        let mut out = f.debug_struct("Synced");
        out.field("kind", &K::NAME);
        if K::REDACTED {
            out.field("value", &format_args!("{REDACTION_MARKER}"));
        } else {
            out.field("value", &inner.value);
        }
        out.field("listening", &inner.subscriber.is_some()).finish()
    }
}

impl<K: ScalarKind> FromStr for Synced<K> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        K::parse(s).map(Self::new)
    }
}

/// Secret containers serialize as the redaction marker.
impl<K> Serialize for Synced<K>
where
    K: ScalarKind,
    K::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if K::REDACTED {
            return serializer.serialize_str(REDACTION_MARKER);
        }
        self.inner.read().value.serialize(serializer)
    }
}

impl<'de, K> Deserialize<'de> for Synced<K>
where
    K: ScalarKind,
    K::Value: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <K::Value as Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}
