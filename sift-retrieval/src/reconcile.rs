//! Reconciliation: merge semantic candidates and keyword matches into one
//! record per document url.
//!
//! Keyword presence dominates. A document found by both retrievers is
//! overwritten to `1.0` / `keyword-match` (never averaged); a document found
//! only by keyword enters at `1.0` / `keyword`. Discovery order is kept:
//! semantic candidates in their ranked order, then new keyword matches in
//! store order. Ranking uses that order to break score ties.

use std::collections::HashMap;

use sift_core::constants::KEYWORD_SIMILARITY;
use sift_core::models::{Candidate, Document, MatchMethod};

/// One query's candidates, unique by url, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    index: HashMap<String, usize>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from semantic candidates. A url repeated by the store keeps its
    /// first position.
    pub fn seed_semantic(&mut self, semantic: Vec<Candidate>) {
        for candidate in semantic {
            if self.index.contains_key(candidate.url()) {
                continue;
            }
            self.index
                .insert(candidate.url().to_string(), self.candidates.len());
            self.candidates.push(candidate);
        }
    }

    /// Apply keyword matches on top of whatever is already pooled.
    pub fn apply_keyword(&mut self, keyword_docs: Vec<Document>) {
        for document in keyword_docs {
            let pooled = self.index.get(&document.url).copied();
            match pooled {
                Some(i) => {
                    let existing = &mut self.candidates[i];
                    existing.similarity = KEYWORD_SIMILARITY;
                    // A url repeated within the keyword results must not
                    // promote a keyword-only candidate to keyword-match.
                    if existing.method == MatchMethod::Semantic {
                        existing.method = MatchMethod::KeywordMatch;
                    }
                }
                None => {
                    self.index.insert(document.url.clone(), self.candidates.len());
                    self.candidates.push(Candidate::new(
                        document,
                        KEYWORD_SIMILARITY,
                        MatchMethod::Keyword,
                    ));
                }
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<&Candidate> {
        self.index.get(url).map(|&i| &self.candidates[i])
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

/// Semantic first, keyword second, always in that order.
pub fn reconcile(semantic: Vec<Candidate>, keyword_docs: Vec<Document>) -> CandidatePool {
    let mut pool = CandidatePool::new();
    pool.seed_semantic(semantic);
    pool.apply_keyword(keyword_docs);
    pool
}
