use chrono::{DateTime, Utc};

use crate::errors::SiftResult;
use crate::models::{Document, DocumentSummary};

/// Read-side contract of the persisted corpus.
///
/// "No matches" is `Ok(vec![])`; a failed call is always `Err`. Keyword
/// values are untrusted user input and must be bound as query parameters.
pub trait IDocumentStore: Send + Sync {
    // --- Search ---

    /// The `k` documents nearest to `vector` by cosine distance, ascending.
    fn nearest(&self, vector: &[f32], k: usize) -> SiftResult<Vec<(Document, f64)>>;

    /// Up to `k` documents whose title or content contains any of
    /// `keywords` as a case-insensitive substring.
    fn match_any(&self, keywords: &[String], k: usize) -> SiftResult<Vec<Document>>;

    // --- Aggregation ---
    fn count(&self) -> SiftResult<usize>;
    fn count_matching(&self, topic: &str) -> SiftResult<usize>;
    fn count_title_containing(&self, topic: &str) -> SiftResult<usize>;
    fn count_by_source(&self) -> SiftResult<Vec<(String, usize)>>;
    fn created_range(&self) -> SiftResult<Option<(DateTime<Utc>, DateTime<Utc>)>>;

    // --- Listing ---
    fn list_recent(&self, limit: usize) -> SiftResult<Vec<DocumentSummary>>;
}
