//! Mapping from an authoritative transaction to a key status.

use tollgate_types::{KeyStatus, Timestamp, Transaction, TransactionStatus};

/// Derive a key's status from its authoritative transaction.
///
/// `expiration` is the key's expiration; `now` is the evaluation time. Both
/// are explicit arguments so identical inputs always map to the same status.
///
/// A mined purchase of lapsed time is `Expired` no matter how deep it is
/// buried; below that, `Confirming` until the required depth is reached
/// (`Valid` starts at exactly the required count). Any non-mined status is
/// mirrored onto the key verbatim.
pub fn derive_key_status(
    authoritative: Option<&Transaction>,
    expiration: Timestamp,
    required_confirmations: u32,
    now: Timestamp,
) -> KeyStatus {
    let Some(tx) = authoritative else {
        return KeyStatus::None;
    };

    match tx.status {
        TransactionStatus::Mined => {
            if expiration < now {
                KeyStatus::Expired
            } else if tx.confirmations < required_confirmations {
                KeyStatus::Confirming
            } else {
                KeyStatus::Valid
            }
        }
        TransactionStatus::Submitted => KeyStatus::Submitted,
        TransactionStatus::Pending => KeyStatus::Pending,
        TransactionStatus::Failed => KeyStatus::Failed,
        TransactionStatus::Dropped => KeyStatus::Dropped,
    }
}
