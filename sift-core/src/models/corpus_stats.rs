use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lightweight listing row for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub title: String,
    pub url: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate view of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_documents: usize,
    /// `(source, count)`, ordered by source name.
    pub by_source: Vec<(String, usize)>,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    /// `(topic, titles mentioning it)`, highest count first, zero counts omitted.
    pub top_topics: Vec<(String, usize)>,
}
