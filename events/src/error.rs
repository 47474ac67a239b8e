//! Failure events surfaced by a chain event source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A generic failure of the underlying chain connection.
///
/// Carried as an event so every waiting watcher observes the same failure;
/// the resolver surfaces it through its own error type.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{reason}")]
pub struct ChainFailure {
    pub reason: String,
}

impl ChainFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
