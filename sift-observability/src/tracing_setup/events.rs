//! Structured log events for retrieval operations.
//!
//! Each function emits a `tracing` event with an `event` field so log
//! pipelines can select on it.

use sift_core::models::MatchMethod;

/// A search finished.
pub fn search_completed(semantic: usize, keyword: usize, pooled: usize, results: usize, degraded: bool) {
    tracing::info!(
        event = "search_completed",
        semantic,
        keyword,
        pooled,
        results,
        degraded,
        "search complete"
    );
}

/// One retrieval signal failed and the other's results were returned.
pub fn search_degraded(failed_method: MatchMethod, reason: &str) {
    tracing::warn!(
        event = "search_degraded",
        failed_method = %failed_method,
        reason = %reason,
        "retrieval signal failed, returning partial results"
    );
}

/// A retrieval did not finish before the request deadline.
pub fn deadline_exceeded(method: MatchMethod, deadline_ms: u64) {
    tracing::warn!(
        event = "deadline_exceeded",
        method = %method,
        deadline_ms,
        "retrieval deadline exceeded"
    );
}
