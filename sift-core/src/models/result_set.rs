use serde::{Deserialize, Serialize};

use super::{Candidate, MatchMethod};

/// The caller-facing view of one ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub content: String,
    pub url: String,
    pub source: String,
    pub similarity: f64,
    pub method: MatchMethod,
}

impl From<Candidate> for SearchHit {
    fn from(c: Candidate) -> Self {
        Self {
            title: c.document.title,
            content: c.document.content,
            url: c.document.url,
            source: c.document.source,
            similarity: c.similarity,
            method: c.method,
        }
    }
}

/// Disclosure that a result set was built from one retrieval signal only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradationNotice {
    /// The retrieval path that failed (`semantic` or `keyword`).
    pub failed_method: MatchMethod,
    pub reason: String,
}

/// Final ordered results of one search.
///
/// Order is the order assembled by diversified truncation, not a re-sort by
/// score. No `url` appears twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    candidates: Vec<Candidate>,
    degradation: Option<DegradationNotice>,
}

impl ResultSet {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            degradation: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_degradation(mut self, notice: DegradationNotice) -> Self {
        self.degradation = Some(notice);
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Flattened `(title, content, url, source, similarity)` views.
    pub fn hits(&self) -> Vec<SearchHit> {
        self.candidates.iter().cloned().map(SearchHit::from).collect()
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        self.candidates.into_iter().map(SearchHit::from).collect()
    }

    pub fn urls(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.url()).collect()
    }

    /// Set when only one retrieval signal contributed.
    pub fn degradation(&self) -> Option<&DegradationNotice> {
        self.degradation.as_ref()
    }

    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// "No evidence found". Callers must not treat this like a
    /// low-similarity but non-empty result.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
