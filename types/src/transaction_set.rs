//! Immutable snapshots of the transactions a watcher knows about.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::hash::TxHash;
use crate::transaction::Transaction;

/// The set of known transactions, keyed by hash.
///
/// Snapshot semantics: every modification produces a new set, so a caller
/// holding an older snapshot never sees it change underneath an await.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSet(HashMap<TxHash, Transaction>);

impl TransactionSet {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, hash: &TxHash) -> Option<&Transaction> {
        self.0.get(hash)
    }

    pub fn contains(&self, hash: &TxHash) -> bool {
        self.0.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the transactions (order unspecified).
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.0.values()
    }

    pub fn hashes(&self) -> impl Iterator<Item = &TxHash> {
        self.0.keys()
    }

    /// A new set with `tx` inserted keyed by its hash, replacing any prior
    /// entry for that hash. `self` is left untouched.
    pub fn with_transaction(&self, tx: Transaction) -> TransactionSet {
        let mut entries = self.0.clone();
        entries.insert(tx.hash.clone(), tx);
        Self(entries)
    }
}

impl FromIterator<Transaction> for TransactionSet {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self(iter.into_iter().map(|tx| (tx.hash.clone(), tx)).collect())
    }
}
