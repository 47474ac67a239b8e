//! Cancellation of in-flight watches.
//!
//! The embedding host decides when watching stops (page teardown, wallet
//! switch, shutdown) and broadcasts that decision to every watch in flight
//! via a `tokio::sync::broadcast` channel.

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Coordinates cancellation across any number of in-flight watches.
///
/// Watchers call [`subscribe`] to get a receiver, then `select!` on it
/// alongside the event stream. Cancellation is sticky: a watch that starts
/// after [`cancel`] was triggered still observes it through
/// [`is_cancelled`], so the signal cannot fall into the gap between
/// subscribing and waiting.
///
/// [`subscribe`]: Canceller::subscribe
/// [`cancel`]: Canceller::cancel
/// [`is_cancelled`]: Canceller::is_cancelled
pub struct Canceller {
    tx: broadcast::Sender<()>,
    cancelled: AtomicBool,
}

impl Canceller {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx, cancelled: AtomicBool::new(false) }
    }

    /// Get a receiver that will be notified on cancellation.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let _ = self.tx.send(());
    }

    /// Whether cancellation has been triggered.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Default for Canceller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cancellation_notifies_subscribers() {
        let canceller = Canceller::new();
        let mut rx = canceller.subscribe();
        canceller.cancel();
        assert!(rx.recv().await.is_ok());
    }

    #[tokio::test]
    async fn multiple_subscribers_all_notified() {
        let canceller = Canceller::new();
        let mut rx1 = canceller.subscribe();
        let mut rx2 = canceller.subscribe();
        canceller.cancel();
        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
    }

    #[tokio::test]
    async fn cancellation_is_sticky_for_late_subscribers() {
        let canceller = Canceller::new();
        assert!(!canceller.is_cancelled());
        canceller.cancel();
        canceller.cancel();
        assert!(canceller.is_cancelled());
        // a receiver created after the fact sees no signal, only the flag
        let _late = canceller.subscribe();
        assert!(canceller.is_cancelled());
    }
}
