//! Hand-off queues that receive change notifications.

use std::sync::mpsc;

use thiserror::Error;
use tokio::sync::mpsc as tokio_mpsc;

/// The receiving side of a subscriber queue has gone away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("subscriber queue closed")]
pub struct SubscriberClosed;

/// Sink installed by [`Synced::listen`](crate::Synced::listen).
///
/// `deliver` is called with the container's write lock held. Implementations
/// backed by a bounded queue block until space is available; that blocking is
/// what keeps notifications lossless and in write order.
pub trait Subscriber<T>: Send + Sync {
    /// Hands `value` to the queue.
    ///
    /// # Errors
    ///
    /// Returns [`SubscriberClosed`] when the receiver has been dropped.
    fn deliver(&self, value: T) -> Result<(), SubscriberClosed>;
}

/// Bounded queue; blocks while full. Capacity zero is a rendezvous.
impl<T: Send> Subscriber<T> for mpsc::SyncSender<T> {
    fn deliver(&self, value: T) -> Result<(), SubscriberClosed> {
        self.send(value).map_err(|_| SubscriberClosed)
    }
}

/// Unbounded queue; never blocks.
impl<T: Send> Subscriber<T> for mpsc::Sender<T> {
    fn deliver(&self, value: T) -> Result<(), SubscriberClosed> {
        self.send(value).map_err(|_| SubscriberClosed)
    }
}

/// Unbounded queue drained by an async task; never blocks, safe to call from
/// inside a runtime.
impl<T: Send> Subscriber<T> for tokio_mpsc::UnboundedSender<T> {
    fn deliver(&self, value: T) -> Result<(), SubscriberClosed> {
        self.send(value).map_err(|_| SubscriberClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_sender_reports_closed_receiver() {
        let (tx, rx) = mpsc::sync_channel::<i64>(1);
        assert_eq!(tx.deliver(1), Ok(()));
        assert_eq!(rx.recv(), Ok(1));
        drop(rx);
        assert_eq!(tx.deliver(2), Err(SubscriberClosed));
    }

    #[test]
    fn unbounded_sender_never_blocks() {
        let (tx, rx) = mpsc::channel::<bool>();
        for _ in 0..64 {
            tx.deliver(true).unwrap();
        }
        assert_eq!(rx.try_iter().count(), 64);
    }

    #[tokio::test]
    async fn tokio_sender_delivers_inside_runtime() {
        let (tx, mut rx) = tokio_mpsc::unbounded_channel::<String>();
        tx.deliver("DEBUG".to_owned()).unwrap();
        assert_eq!(rx.recv().await.as_deref(), Some("DEBUG"));
        drop(rx);
        assert_eq!(tx.deliver("INFO".to_owned()), Err(SubscriberClosed));
    }
}
