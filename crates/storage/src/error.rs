//! Storage error model.

use thiserror::Error;

/// Failure while talking to the durable key-value store.
///
/// Callers in the cart/session layers treat these as best-effort: they log
/// and keep the in-memory state authoritative for the rest of the session.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage payload could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
