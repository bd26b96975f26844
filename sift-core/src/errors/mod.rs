//! Error taxonomy. One enum per subsystem, all folding into [`SiftError`].

mod embedding_error;
mod retrieval_error;
mod storage_error;

pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Root error type for every Sift crate.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("degraded mode: {component} unavailable, using {fallback}")]
    DegradedMode { component: String, fallback: String },
}

impl SiftError {
    /// Whether this error means a collaborator (embedding provider or
    /// document store) could not serve the request. These are surfaced to
    /// the caller unmodified and never retried inside the engine.
    pub fn is_retrieval_unavailable(&self) -> bool {
        matches!(
            self,
            SiftError::StorageError(_)
                | SiftError::EmbeddingError(_)
                | SiftError::RetrievalError(
                    RetrievalError::DeadlineExceeded { .. } | RetrievalError::TaskFailed { .. }
                )
        )
    }
}

/// Result alias used across the workspace.
pub type SiftResult<T> = Result<T, SiftError>;
