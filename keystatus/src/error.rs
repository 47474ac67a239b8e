//! Error types for key-status derivation.

use thiserror::Error;
use tollgate_types::{KeyId, TxHash};

/// Errors from linking transactions to a key.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyStatusError {
    /// The key references a transaction hash the supplied set does not hold.
    #[error("key {key} references transaction {hash} missing from the supplied set")]
    InvalidState { key: KeyId, hash: TxHash },
}
