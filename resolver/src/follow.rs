//! Watching a key all the way to finality.

use tollgate_events::ChainEventSource;
use tollgate_keystatus::link_transactions_to_key;
use tollgate_types::{Key, Timestamp, TransactionSet};

use crate::cancel::Canceller;
use crate::error::ResolveError;
use crate::resolve::{resolve_key_status, Resolution};

/// Resolve a key repeatedly until its authoritative purchase is final.
///
/// `on_change` observes every snapshot, the last one included. Each
/// iteration consumes at most one matching update from the source; errors
/// and cancellation propagate unchanged from [`resolve_key_status`].
pub async fn follow_key_status<S, F>(
    key: &Key,
    transactions: &TransactionSet,
    source: &S,
    required_confirmations: u32,
    cancel: &Canceller,
    mut on_change: F,
) -> Result<Resolution, ResolveError>
where
    S: ChainEventSource,
    F: FnMut(&Resolution),
{
    let mut current = Resolution { transactions: transactions.clone(), key: key.clone() };

    loop {
        let next = resolve_key_status(
            &current.key,
            &current.transactions,
            source,
            required_confirmations,
            cancel,
        )
        .await?;
        on_change(&next);

        if is_settled(&next, required_confirmations)? {
            tracing::info!(key = %next.key.id, status = %next.key.status, "key settled");
            return Ok(next);
        }
        current = next;
    }
}

/// Whether another resolution step could still change anything.
///
/// Re-derives rather than trusting `resolution.key.transactions`: on the
/// already-final path the key comes back exactly as the caller supplied it,
/// which may predate any derivation.
fn is_settled(resolution: &Resolution, required_confirmations: u32) -> Result<bool, ResolveError> {
    let derived = link_transactions_to_key(
        &resolution.key,
        &resolution.transactions,
        required_confirmations,
        Timestamp::now(),
    )?;
    Ok(match derived.authoritative().and_then(|hash| resolution.transactions.get(hash)) {
        Some(tx) => tx.is_final(required_confirmations),
        None => true,
    })
}
