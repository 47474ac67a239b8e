//! Pure key-status derivation.
//!
//! Given an access key, the set of known purchase transactions, and a
//! required-confirmations threshold, this crate computes the key's current
//! status and which transaction is authoritative. No I/O and no clock
//! reads; the evaluation time is an explicit argument, so identical inputs
//! always produce identical outputs.

pub mod error;
pub mod link;
pub mod status;

pub use error::KeyStatusError;
pub use link::link_transactions_to_key;
pub use status::derive_key_status;
