//! Linking known transactions to the key they pay for.

use tollgate_types::{Key, Timestamp, Transaction, TransactionSet, TransactionStatus, TxHash};

use crate::error::KeyStatusError;
use crate::status::derive_key_status;

/// Recompute a key from the transactions that pay for it.
///
/// Returns a new key; neither input is mutated. The output's `transactions`
/// list holds every purchase in the set for this key, ordered
/// authoritative-first: purchases with no block number yet are the newest
/// submissions and sort before mined ones, mined ones sort by descending
/// block number, and ties break by hash so the order is deterministic. The
/// key's status and confirmation count derive from the first entry.
///
/// Every hash the input key already references must resolve in
/// `transactions`. A dangling reference is malformed input and fails with
/// [`KeyStatusError::InvalidState`].
pub fn link_transactions_to_key(
    key: &Key,
    transactions: &TransactionSet,
    required_confirmations: u32,
    now: Timestamp,
) -> Result<Key, KeyStatusError> {
    for hash in &key.transactions {
        if !transactions.contains(hash) {
            return Err(KeyStatusError::InvalidState {
                key: key.id.clone(),
                hash: hash.clone(),
            });
        }
    }

    let mut linked: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.key.as_ref() == Some(&key.id))
        .collect();
    linked.sort_by(|a, b| recency(b).cmp(&recency(a)));

    let authoritative = linked.first().copied();
    let mut next = key.clone();
    next.transactions = linked.iter().map(|tx| tx.hash.clone()).collect();
    next.status = derive_key_status(authoritative, key.expiration, required_confirmations, now);
    next.confirmations = match authoritative {
        Some(tx) if tx.status == TransactionStatus::Mined => tx.confirmations,
        _ => 0,
    };
    Ok(next)
}

/// Sort rank for authoritative-first ordering. Unmined purchases rank above
/// every block number.
fn recency(tx: &Transaction) -> (u64, &TxHash) {
    (tx.block_number.unwrap_or(u64::MAX), &tx.hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tollgate_types::{Address, KeyId, KeyStatus};

    const REQUIRED: u32 = 2;
    const NOW: Timestamp = Timestamp::EPOCH;

    fn key() -> Key {
        Key::new(Address::new("0xlock"), Address::new("0xowner"), Timestamp::new(9_999))
    }

    fn purchase(hash: &str, status: TransactionStatus) -> Transaction {
        Transaction::new(TxHash::new(hash), status).with_key(key().id)
    }

    #[test]
    fn unmined_purchases_outrank_mined_ones() {
        let set = TransactionSet::from_iter([
            purchase("0xaaa", TransactionStatus::Mined).with_block_number(50),
            purchase("0xbbb", TransactionStatus::Pending),
            purchase("0xccc", TransactionStatus::Mined).with_block_number(80),
        ]);

        let linked = link_transactions_to_key(&key(), &set, REQUIRED, NOW).unwrap();
        let hashes: Vec<&str> = linked.transactions.iter().map(|h| h.as_str()).collect();
        assert_eq!(hashes, ["0xbbb", "0xccc", "0xaaa"]);
        assert_eq!(linked.status, KeyStatus::Pending);
    }

    #[test]
    fn purchases_for_other_keys_are_ignored() {
        let stranger = Transaction::new(TxHash::new("0xeee"), TransactionStatus::Mined)
            .with_key(KeyId::for_purchase(&Address::new("0xother"), &Address::new("0xowner")))
            .with_block_number(99);
        let untagged = Transaction::new(TxHash::new("0xfff"), TransactionStatus::Mined);
        let set = TransactionSet::from_iter([
            purchase("0xaaa", TransactionStatus::Mined).with_block_number(10),
            stranger,
            untagged,
        ]);

        let linked = link_transactions_to_key(&key(), &set, REQUIRED, NOW).unwrap();
        assert_eq!(linked.transactions, vec![TxHash::new("0xaaa")]);
    }

    #[test]
    fn dangling_reference_is_invalid_state() {
        let mut stale = key();
        stale.transactions = vec![TxHash::new("0xgone")];

        let err = link_transactions_to_key(&stale, &TransactionSet::new(), REQUIRED, NOW)
            .unwrap_err();
        assert_eq!(
            err,
            KeyStatusError::InvalidState { key: stale.id.clone(), hash: TxHash::new("0xgone") }
        );
        // error path must not have touched the inputs
        assert_eq!(stale.transactions, vec![TxHash::new("0xgone")]);
    }

    #[test]
    fn no_purchases_means_status_none() {
        let linked = link_transactions_to_key(&key(), &TransactionSet::new(), REQUIRED, NOW)
            .unwrap();
        assert_eq!(linked.status, KeyStatus::None);
        assert!(linked.transactions.is_empty());
        assert_eq!(linked.confirmations, 0);
    }

    #[test]
    fn confirmations_copy_from_the_authoritative_purchase_only_when_mined() {
        let mined = TransactionSet::from_iter([
            purchase("0xaaa", TransactionStatus::Mined)
                .with_block_number(10)
                .with_confirmations(7),
        ]);
        let linked = link_transactions_to_key(&key(), &mined, REQUIRED, NOW).unwrap();
        assert_eq!(linked.confirmations, 7);

        let pending = TransactionSet::from_iter([
            purchase("0xbbb", TransactionStatus::Pending).with_confirmations(3),
        ]);
        let linked = link_transactions_to_key(&key(), &pending, REQUIRED, NOW).unwrap();
        assert_eq!(linked.confirmations, 0);
    }

    #[test]
    fn inputs_are_never_mutated() {
        let original = key();
        let set = TransactionSet::from_iter([
            purchase("0xaaa", TransactionStatus::Mined).with_block_number(10),
        ]);
        let set_before = set.clone();

        let linked = link_transactions_to_key(&original, &set, REQUIRED, NOW).unwrap();
        assert_ne!(linked.transactions, original.transactions);
        assert_eq!(original, key());
        assert_eq!(set, set_before);
    }
}
