//! Fundamental types for tollgate.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: transaction hashes, chain addresses, timestamps, purchase
//! transactions and their partial updates, transaction sets, and access keys.

pub mod address;
pub mod hash;
pub mod key;
pub mod time;
pub mod transaction;
pub mod transaction_set;

pub use address::{Address, KeyId};
pub use hash::TxHash;
pub use key::{Key, KeyStatus};
pub use time::Timestamp;
pub use transaction::{Transaction, TransactionStatus, TransactionUpdate};
pub use transaction_set::TransactionSet;
