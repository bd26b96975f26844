//! Vector similarity retrieval.

use sift_core::errors::SiftResult;
use sift_core::models::{Candidate, MatchMethod};
use sift_core::traits::{IDocumentStore, IEmbeddingProvider};
use tracing::debug;

/// Embed `query` and fetch the `top_k` nearest documents, as candidates
/// ordered by similarity descending. Similarity is `1 - cosine distance`,
/// clamped to `[0, 1]`.
pub fn semantic_search(
    embedder: &dyn IEmbeddingProvider,
    store: &dyn IDocumentStore,
    query: &str,
    top_k: usize,
) -> SiftResult<Vec<Candidate>> {
    if top_k == 0 {
        return Ok(Vec::new());
    }

    let embedding = embedder.embed(query)?;
    let neighbours = store.nearest(&embedding, top_k)?;

    let candidates: Vec<Candidate> = neighbours
        .into_iter()
        .map(|(document, distance)| {
            Candidate::new(document, distance_to_similarity(distance), MatchMethod::Semantic)
        })
        .collect();

    debug!(provider = embedder.name(), candidates = candidates.len(), "semantic search");
    Ok(candidates)
}

pub fn distance_to_similarity(distance: f64) -> f64 {
    if distance.is_nan() {
        return 0.0;
    }
    (1.0 - distance).clamp(0.0, 1.0)
}
