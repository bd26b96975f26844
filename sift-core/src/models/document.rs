use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted corpus entry.
///
/// Written by ingestion collaborators, read-only to the retrieval core.
/// `url` is the document's identity: two rows with the same `url` are the
/// same document regardless of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub title: String,
    pub content: String,
    /// Provenance tag, e.g. `blog`, `documentation`, `microsoft`, `servicenow`.
    pub source: String,
    /// Fixed-dimension embedding of the document text. Search queries do
    /// not load it back, so it is empty on documents returned by the store.
    #[serde(default)]
    pub embedding: Vec<f32>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Build a document without an embedding, stamped with the current time.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
            source: source.into(),
            embedding: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = embedding;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Text handed to the embedding provider at ingestion time.
    pub fn embedding_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }
}
