//! Shared test collaborators.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sift_core::errors::{SiftResult, StorageError};
use sift_core::models::{Document, DocumentSummary};
use sift_core::traits::{IDocumentStore, IEmbeddingProvider};
use sift_embeddings::HashedTfIdfProvider;
use sift_storage::StorageEngine;

pub const DIMS: usize = 256;

pub fn embedder() -> Arc<HashedTfIdfProvider> {
    Arc::new(HashedTfIdfProvider::new(DIMS))
}

/// In-memory store holding the fixture corpus, embedded with `embedder`.
pub fn fixture_store(embedder: &dyn IEmbeddingProvider) -> Arc<StorageEngine> {
    let store = StorageEngine::open_in_memory().unwrap();
    let docs: Vec<Document> = test_fixtures::load_corpus()
        .into_iter()
        .map(|d| {
            let embedding = embedder.embed(&d.embedding_text()).unwrap();
            d.with_embedding(embedding)
        })
        .collect();
    store.upsert_bulk(&docs).unwrap();
    Arc::new(store)
}

/// Store with canned answers. `nearest` returns `(document, distance)`.
#[derive(Default)]
pub struct StubStore {
    pub nearest: Vec<(Document, f64)>,
    pub matches: Vec<Document>,
    pub nearest_delay: Option<Duration>,
    pub match_delay: Option<Duration>,
    pub fail_nearest: bool,
    pub fail_match: bool,
}

impl StubStore {
    fn failure(what: &str) -> sift_core::SiftError {
        StorageError::SqliteError {
            message: format!("{what}: database is locked"),
        }
        .into()
    }
}

impl IDocumentStore for StubStore {
    fn nearest(&self, _: &[f32], k: usize) -> SiftResult<Vec<(Document, f64)>> {
        if let Some(d) = self.nearest_delay {
            std::thread::sleep(d);
        }
        if self.fail_nearest {
            return Err(Self::failure("nearest"));
        }
        Ok(self.nearest.iter().take(k).cloned().collect())
    }

    fn match_any(&self, _: &[String], k: usize) -> SiftResult<Vec<Document>> {
        if let Some(d) = self.match_delay {
            std::thread::sleep(d);
        }
        if self.fail_match {
            return Err(Self::failure("match_any"));
        }
        Ok(self.matches.iter().take(k).cloned().collect())
    }

    fn count(&self) -> SiftResult<usize> {
        Ok(0)
    }
    fn count_matching(&self, _: &str) -> SiftResult<usize> {
        Ok(0)
    }
    fn count_title_containing(&self, _: &str) -> SiftResult<usize> {
        Ok(0)
    }
    fn count_by_source(&self) -> SiftResult<Vec<(String, usize)>> {
        Ok(Vec::new())
    }
    fn created_range(&self) -> SiftResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
        Ok(None)
    }
    fn list_recent(&self, _: usize) -> SiftResult<Vec<DocumentSummary>> {
        Ok(Vec::new())
    }
}

/// Embedder that always fails, standing in for an unreachable model server.
pub struct DownEmbedder;

impl IEmbeddingProvider for DownEmbedder {
    fn embed(&self, _: &str) -> SiftResult<Vec<f32>> {
        Err(sift_core::errors::EmbeddingError::ProviderUnavailable {
            provider: "down".to_string(),
        }
        .into())
    }
    fn embed_batch(&self, texts: &[String]) -> SiftResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
    fn dimensions(&self) -> usize {
        DIMS
    }
    fn name(&self) -> &str {
        "down"
    }
    fn is_available(&self) -> bool {
        false
    }
}

pub fn doc(url: &str, title: &str, source: &str) -> Document {
    Document::new(url, title, format!("{title} body"), source)
}

/// The "tempdb issues" scenario: three blog posts semantically, one
/// ServiceNow incident by keyword only.
pub fn tempdb_scenario() -> StubStore {
    StubStore {
        nearest: vec![
            (doc("https://blog/a", "Tempdb sizing", "blog"), 0.18),
            (doc("https://blog/b", "Version store growth", "blog"), 0.23),
            (doc("https://blog/c", "Spills and sorts", "blog"), 0.35),
        ],
        matches: vec![doc("https://sn/INC0012388", "INC0012388 tempdb full", "servicenow")],
        ..Default::default()
    }
}
