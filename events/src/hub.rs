//! In-process chain event hub.

use tokio::sync::broadcast;
use tollgate_types::{TransactionUpdate, TxHash};

use crate::error::ChainFailure;
use crate::source::{ChainEventSource, TransactionUpdated};

/// Default broadcast capacity for each topic channel.
pub const DEFAULT_CAPACITY: usize = 256;

/// Shared in-process event source, one broadcast channel per topic.
///
/// The host side that talks to the chain publishes into the hub; watchers
/// subscribe through [`ChainEventSource`]. Publishing never blocks and never
/// fails: with no subscribers an event is dropped, and a slow subscriber
/// lags rather than stalling the publisher.
pub struct ChainEventHub {
    update_tx: broadcast::Sender<TransactionUpdated>,
    failure_tx: broadcast::Sender<ChainFailure>,
}

impl ChainEventHub {
    /// Create a hub with the given per-topic channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (update_tx, _) = broadcast::channel(capacity);
        let (failure_tx, _) = broadcast::channel(capacity);
        Self { update_tx, failure_tx }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Publish a partial update for the transaction with `hash`.
    pub fn publish_update(&self, hash: TxHash, update: TransactionUpdate) {
        tracing::debug!(
            %hash,
            receivers = self.update_tx.receiver_count(),
            "publishing transaction update"
        );
        let _ = self.update_tx.send(TransactionUpdated { hash, update });
    }

    /// Publish a failure of the underlying chain connection.
    pub fn publish_failure(&self, reason: impl Into<String>) {
        let failure = ChainFailure::new(reason);
        tracing::debug!(
            reason = %failure.reason,
            receivers = self.failure_tx.receiver_count(),
            "publishing chain failure"
        );
        let _ = self.failure_tx.send(failure);
    }

    /// Number of live update subscriptions.
    pub fn update_listener_count(&self) -> usize {
        self.update_tx.receiver_count()
    }

    /// Number of live failure subscriptions.
    pub fn failure_listener_count(&self) -> usize {
        self.failure_tx.receiver_count()
    }
}

impl Default for ChainEventHub {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl ChainEventSource for ChainEventHub {
    fn subscribe_updates(&self) -> broadcast::Receiver<TransactionUpdated> {
        self.update_tx.subscribe()
    }

    fn subscribe_failures(&self) -> broadcast::Receiver<ChainFailure> {
        self.failure_tx.subscribe()
    }
}
