//! Transaction hash type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chain transaction hash, stored in its `0x`-prefixed hex string form.
///
/// Hashes arrive from several boundaries (chain reads, event payloads, host
/// bookkeeping) with inconsistent casing. Construction lowercases the string
/// once so event correlation can use exact equality afterwards.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct TxHash(String);

impl TxHash {
    /// Create a transaction hash from its string form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_lowercase())
    }

    /// Render a raw digest as a `0x`-prefixed lowercase hex hash.
    pub fn from_bytes(digest: &[u8]) -> Self {
        Self(format!("0x{}", hex::encode(digest)))
    }

    /// Return the hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", self.0.get(..10).unwrap_or(&self.0))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TxHash {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TxHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
