//! Single-step resolution of a key against the chain event stream.

use tokio::sync::broadcast::error::RecvError;

use tollgate_events::ChainEventSource;
use tollgate_keystatus::link_transactions_to_key;
use tollgate_types::{Key, Timestamp, Transaction, TransactionSet, TransactionUpdate};

use crate::cancel::Canceller;
use crate::error::ResolveError;

/// The outcome of one resolution step.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub transactions: TransactionSet,
    pub key: Key,
}

/// Resolve a key's status against the chain event stream, one step.
///
/// Derives the key from the known transactions first. If the authoritative
/// purchase is already final (it left the in-flight statuses, or it is
/// mined strictly past `required_confirmations`), or the key has no
/// purchases at all, the inputs come back unchanged and the event source is
/// never subscribed.
///
/// Otherwise this waits, with no timeout, for exactly one update matching
/// the authoritative transaction's hash. Updates for other hashes keep the
/// wait alive. The matching update is merged into the watched transaction
/// field-wise, the merged transaction is inserted into a new set, and the
/// key is re-derived from that set. A failure event from the source rejects
/// with [`ResolveError::EventSource`]; cancellation rejects with
/// [`ResolveError::Cancelled`]. Event interest is withdrawn on every exit
/// path.
pub async fn resolve_key_status<S: ChainEventSource>(
    key: &Key,
    transactions: &TransactionSet,
    source: &S,
    required_confirmations: u32,
    cancel: &Canceller,
) -> Result<Resolution, ResolveError> {
    let derived =
        link_transactions_to_key(key, transactions, required_confirmations, Timestamp::now())?;

    let watched = match derived.authoritative().and_then(|hash| transactions.get(hash)) {
        Some(tx) if !tx.is_final(required_confirmations) => tx.clone(),
        _ => {
            tracing::debug!(
                key = %key.id,
                status = %derived.status,
                "key already settled, nothing to watch"
            );
            return Ok(Resolution { transactions: transactions.clone(), key: key.clone() });
        }
    };

    tracing::debug!(
        key = %key.id,
        hash = %watched.hash,
        status = %watched.status,
        confirmations = watched.confirmations,
        "watching purchase for its next update"
    );
    let update = wait_for_update(source, &watched, cancel).await?;

    let merged = watched.merged(&update);
    let new_transactions = transactions.with_transaction(merged);
    let new_key =
        link_transactions_to_key(key, &new_transactions, required_confirmations, Timestamp::now())?;
    tracing::debug!(key = %new_key.id, status = %new_key.status, "key re-derived after update");

    Ok(Resolution { transactions: new_transactions, key: new_key })
}

/// Wait for the next update whose hash matches `watched`, or fail on
/// cancellation, a source failure, or source loss.
async fn wait_for_update<S: ChainEventSource>(
    source: &S,
    watched: &Transaction,
    cancel: &Canceller,
) -> Result<TransactionUpdate, ResolveError> {
    let mut cancel_rx = cancel.subscribe();
    let mut failures = source.subscribe_failures();
    let mut updates = source.subscribe_updates();

    // cancel() may have fired before we subscribed; the sticky flag covers
    // the gap
    if cancel.is_cancelled() {
        return Err(ResolveError::Cancelled);
    }

    loop {
        tokio::select! {
            biased;

            _ = cancel_rx.recv() => {
                tracing::debug!(hash = %watched.hash, "watch cancelled");
                return Err(ResolveError::Cancelled);
            }
            failure = failures.recv() => match failure {
                Ok(failure) => {
                    tracing::warn!(
                        hash = %watched.hash,
                        %failure,
                        "chain event source failed while watching"
                    );
                    return Err(ResolveError::EventSource(failure));
                }
                Err(RecvError::Closed) => return Err(ResolveError::SourceClosed),
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "failure stream lagged, continuing");
                }
            },
            event = updates.recv() => match event {
                Ok(event) if event.hash == watched.hash => return Ok(event.update),
                Ok(event) => {
                    tracing::debug!(
                        seen = %event.hash,
                        watching = %watched.hash,
                        "ignoring update for unrelated transaction"
                    );
                }
                Err(RecvError::Closed) => return Err(ResolveError::SourceClosed),
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "update stream lagged, continuing");
                }
            },
        }
    }
}
