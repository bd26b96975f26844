/// Retrieval engine errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("{method} retrieval did not finish within {deadline_ms}ms")]
    DeadlineExceeded { method: String, deadline_ms: u64 },

    #[error("retrieval task failed: {reason}")]
    TaskFailed { reason: String },
}
