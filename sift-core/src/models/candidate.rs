use serde::{Deserialize, Serialize};

use super::Document;

/// Which retrieval path discovered a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMethod {
    /// Found only by vector similarity.
    #[serde(rename = "semantic")]
    Semantic,
    /// Found only by keyword presence.
    #[serde(rename = "keyword")]
    Keyword,
    /// Found by both retrievers; keyword presence confirmed the semantic hit.
    #[serde(rename = "keyword-match")]
    KeywordMatch,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::Semantic => "semantic",
            MatchMethod::Keyword => "keyword",
            MatchMethod::KeywordMatch => "keyword-match",
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document annotated with a relevance score for a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub document: Document,
    /// Relevance in `[0, 1]`.
    pub similarity: f64,
    pub method: MatchMethod,
}

impl Candidate {
    pub fn new(document: Document, similarity: f64, method: MatchMethod) -> Self {
        Self {
            document,
            similarity,
            method,
        }
    }

    pub fn url(&self) -> &str {
        &self.document.url
    }

    pub fn source(&self) -> &str {
        &self.document.source
    }
}
