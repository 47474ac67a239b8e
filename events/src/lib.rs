//! Chain event distribution.
//!
//! One hub fans transaction updates and connection failures out to any
//! number of concurrent watchers. The resolver crate consumes it through
//! the [`ChainEventSource`] trait; the host side that actually talks to the
//! chain publishes into it.

pub mod error;
pub mod hub;
pub mod source;

pub use error::ChainFailure;
pub use hub::ChainEventHub;
pub use source::{ChainEventSource, TransactionUpdated};
