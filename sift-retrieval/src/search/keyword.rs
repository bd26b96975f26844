//! Literal keyword retrieval.

use sift_core::errors::SiftResult;
use sift_core::models::Document;
use sift_core::traits::IDocumentStore;
use tracing::debug;

/// Documents containing any of the first `max_keywords` keywords in title
/// or content. Keywords past the cap are ignored. An empty keyword list
/// skips the store entirely.
pub fn keyword_search(
    store: &dyn IDocumentStore,
    keywords: &[String],
    max_keywords: usize,
    top_k: usize,
) -> SiftResult<Vec<Document>> {
    let selected = &keywords[..keywords.len().min(max_keywords)];
    if selected.is_empty() || top_k == 0 {
        debug!("no keywords, keyword search skipped");
        return Ok(Vec::new());
    }

    let documents = store.match_any(selected, top_k)?;
    debug!(keywords = ?selected, matches = documents.len(), "keyword search");
    Ok(documents)
}
