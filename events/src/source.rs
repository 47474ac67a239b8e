//! The event source watchers subscribe to.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tollgate_types::{TransactionUpdate, TxHash};

use crate::error::ChainFailure;

/// A partial update for the transaction with `hash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdated {
    pub hash: TxHash,
    pub update: TransactionUpdate,
}

/// Something that emits chain events to any number of concurrent watchers.
///
/// Subscriptions observe only events published after they were created;
/// nothing is replayed. Delivery is fan-out: every subscriber sees every
/// event, so one watcher consuming a matching update never starves another.
pub trait ChainEventSource {
    /// Subscribe to transaction updates.
    fn subscribe_updates(&self) -> broadcast::Receiver<TransactionUpdated>;

    /// Subscribe to failures of the underlying chain connection.
    fn subscribe_failures(&self) -> broadcast::Receiver<ChainFailure>;
}
