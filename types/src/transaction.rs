//! Purchase transactions and the partial updates chain watchers emit.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::address::KeyId;
use crate::hash::TxHash;

/// Lifecycle status of a key-purchase transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Handed to the chain but not yet seen in the mempool.
    Submitted,
    /// In the mempool, waiting to be mined.
    Pending,
    /// Included in a block; confirmations accumulate from here.
    Mined,
    /// Reverted or otherwise failed on chain.
    Failed,
    /// Evicted from the mempool or replaced by a competing transaction.
    Dropped,
}

impl TransactionStatus {
    /// Whether a watcher may still see this transaction progress.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitted | Self::Pending | Self::Mined)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Pending => "pending",
            Self::Mined => "mined",
            Self::Failed => "failed",
            Self::Dropped => "dropped",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A key-purchase transaction as this core knows it.
///
/// `extra` holds fields the core does not interpret (gas price, nonce, host
/// bookkeeping). They ride along through merges untouched unless an update
/// names them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: TxHash,
    pub status: TransactionStatus,
    /// Meaningful once mined; 0 before that.
    #[serde(default)]
    pub confirmations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// The access key this purchase pays for, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    pub fn new(hash: TxHash, status: TransactionStatus) -> Self {
        Self {
            hash,
            status,
            confirmations: 0,
            block_number: None,
            key: None,
            extra: Map::new(),
        }
    }

    pub fn with_confirmations(mut self, confirmations: u32) -> Self {
        self.confirmations = confirmations;
        self
    }

    pub fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    pub fn with_key(mut self, key: KeyId) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// Whether watching this transaction can no longer change anything: it
    /// has left the in-flight statuses, or it is mined strictly deeper than
    /// the required confirmation count.
    ///
    /// Note the strict inequality. A transaction mined with exactly
    /// `required_confirmations` confirmations is still watched, even though
    /// the key it pays for already counts as valid.
    pub fn is_final(&self, required_confirmations: u32) -> bool {
        !self.status.is_in_flight()
            || (self.status == TransactionStatus::Mined
                && self.confirmations > required_confirmations)
    }

    /// Apply a partial update, field-wise. Fields the update carries replace
    /// this transaction's; absent fields are preserved; `extra` entries are
    /// merged per name with the update winning. The hash never changes, so
    /// an update cannot move a transaction to a different identity.
    pub fn merged(&self, update: &TransactionUpdate) -> Transaction {
        let mut next = self.clone();
        if let Some(status) = update.status {
            next.status = status;
        }
        if let Some(confirmations) = update.confirmations {
            next.confirmations = confirmations;
        }
        if let Some(block_number) = update.block_number {
            next.block_number = Some(block_number);
        }
        if let Some(key) = &update.key {
            next.key = Some(key.clone());
        }
        for (name, value) in &update.extra {
            next.extra.insert(name.clone(), value.clone());
        }
        next
    }
}

/// A partial transaction as emitted by a chain watcher.
///
/// Only the fields present overwrite the watched transaction on merge.
/// Fields this core does not model land in `extra` and overwrite by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<KeyId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_confirmations(mut self, confirmations: u32) -> Self {
        self.confirmations = Some(confirmations);
        self
    }

    pub fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    pub fn with_key(mut self, key: KeyId) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }
}
