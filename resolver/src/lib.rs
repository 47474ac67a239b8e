//! Key-status resolution against a chain event stream.
//!
//! The watcher half of tollgate. One step ([`resolve_key_status`]) takes
//! the current key and transaction snapshots, decides whether the
//! authoritative purchase is already final, and if not waits for exactly
//! one matching update from the event source, merges it, and re-derives the
//! key. [`follow_key_status`] repeats that step until the purchase settles.

pub mod cancel;
pub mod config;
pub mod error;
pub mod follow;
pub mod resolve;

pub use cancel::Canceller;
pub use config::ResolverConfig;
pub use error::ResolveError;
pub use follow::follow_key_status;
pub use resolve::{resolve_key_status, Resolution};
