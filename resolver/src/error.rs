use thiserror::Error;

use tollgate_events::ChainFailure;
use tollgate_keystatus::KeyStatusError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("key status error: {0}")]
    KeyStatus(#[from] KeyStatusError),

    #[error("chain event source failed: {0}")]
    EventSource(ChainFailure),

    #[error("chain event source closed while a watch was outstanding")]
    SourceClosed,

    #[error("key status resolution was cancelled")]
    Cancelled,

    #[error("config error: {0}")]
    Config(String),
}
