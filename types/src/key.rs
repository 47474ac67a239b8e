//! Access keys and their derived status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::address::{Address, KeyId};
use crate::hash::TxHash;
use crate::time::Timestamp;

/// Derived status of an access key.
///
/// Mirrors the authoritative purchase transaction until that transaction is
/// mined; from there the key graduates through `Confirming` to `Valid`, or
/// to `Expired` once the purchased time has lapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    /// No purchase is known for this key.
    None,
    /// The purchase was handed to the chain.
    Submitted,
    /// The purchase is in the mempool.
    Pending,
    /// Mined, but not yet at the required confirmation depth.
    Confirming,
    /// Mined, confirmed, and unexpired: the key opens the lock.
    Valid,
    /// The purchased time has lapsed.
    Expired,
    /// The purchase failed on chain.
    Failed,
    /// The purchase was evicted from the mempool or replaced.
    Dropped,
}

impl KeyStatus {
    /// Whether the key currently grants access.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Submitted => "submitted",
            Self::Pending => "pending",
            Self::Confirming => "confirming",
            Self::Valid => "valid",
            Self::Expired => "expired",
            Self::Failed => "failed",
            Self::Dropped => "dropped",
        }
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A time-limited access key: one lock, one owner, bought with one or more
/// purchase transactions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub id: KeyId,
    pub lock: Address,
    pub owner: Address,
    /// When the purchased time lapses, as reported by the lock.
    pub expiration: Timestamp,
    pub status: KeyStatus,
    /// Confirmation count of the authoritative transaction once mined.
    #[serde(default)]
    pub confirmations: u32,
    /// Hashes of the purchases for this key, authoritative first after a
    /// derivation pass.
    #[serde(default)]
    pub transactions: Vec<TxHash>,
}

impl Key {
    /// A fresh key for `owner` on `lock`, before any purchase is linked.
    pub fn new(lock: Address, owner: Address, expiration: Timestamp) -> Self {
        Self {
            id: KeyId::for_purchase(&lock, &owner),
            lock,
            owner,
            expiration,
            status: KeyStatus::None,
            confirmations: 0,
            transactions: Vec::new(),
        }
    }

    /// The hash of the authoritative transaction, if any purchase is linked.
    pub fn authoritative(&self) -> Option<&TxHash> {
        self.transactions.first()
    }

    /// Whether the key's purchased time has lapsed as of `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expiration < now
    }
}
