//! CorpusInspector: counts, recency and summary statistics over the store.

use sift_core::constants::TOP_TOPICS_REPORTED;
use sift_core::errors::SiftResult;
use sift_core::models::{CorpusStats, DocumentSummary};
use sift_core::traits::IDocumentStore;
use tracing::debug;

pub struct CorpusInspector<'a> {
    store: &'a dyn IDocumentStore,
}

impl<'a> CorpusInspector<'a> {
    pub fn new(store: &'a dyn IDocumentStore) -> Self {
        Self { store }
    }

    /// Documents whose title or content mentions `topic`, case-insensitive.
    /// A blank topic counts the whole corpus.
    pub fn count_about(&self, topic: &str) -> SiftResult<usize> {
        let n = self.store.count_matching(topic.trim())?;
        debug!(topic, count = n, "count about");
        Ok(n)
    }

    /// Newest documents first.
    pub fn recent(&self, limit: usize) -> SiftResult<Vec<DocumentSummary>> {
        self.store.list_recent(limit)
    }

    /// Totals, per-source counts, date range, and the most common of
    /// `topics` by number of titles mentioning them.
    pub fn stats(&self, topics: &[&str]) -> SiftResult<CorpusStats> {
        let range = self.store.created_range()?;

        let mut top_topics = Vec::new();
        for topic in topics {
            let n = self.store.count_title_containing(topic)?;
            if n > 0 {
                top_topics.push((topic.to_string(), n));
            }
        }
        // Stable: equal counts keep the caller's topic order.
        top_topics.sort_by(|a, b| b.1.cmp(&a.1));
        top_topics.truncate(TOP_TOPICS_REPORTED);

        Ok(CorpusStats {
            total_documents: self.store.count()?,
            by_source: self.store.count_by_source()?,
            earliest: range.map(|(earliest, _)| earliest),
            latest: range.map(|(_, latest)| latest),
            top_topics,
        })
    }
}
