//! RetrievalEngine: query → keywords → semantic + keyword retrieval →
//! reconciliation → diversified ranking.
//!
//! The engine holds no per-query state. Collaborators are opened once per
//! process and shared by `Arc`.

use std::sync::Arc;
use std::time::Duration;

use sift_core::config::RetrievalConfig;
use sift_core::errors::{RetrievalError, SiftResult};
use sift_core::models::{Candidate, DegradationNotice, Document, MatchMethod, ResultSet};
use sift_core::traits::{IDocumentStore, IEmbeddingProvider};
use sift_observability::tracing_setup::events;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::error::Elapsed;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

use crate::preprocess::extract_keywords;
use crate::ranking::rank_and_limit;
use crate::reconcile::reconcile;
use crate::search::{keyword_search, semantic_search};

pub struct RetrievalEngine {
    embedder: Arc<dyn IEmbeddingProvider>,
    store: Arc<dyn IDocumentStore>,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    pub fn new(
        embedder: Arc<dyn IEmbeddingProvider>,
        store: Arc<dyn IDocumentStore>,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embedder,
            store,
            config,
        }
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn IDocumentStore {
        self.store.as_ref()
    }

    /// Search with the configured default limit.
    pub fn search_default(&self, query: &str) -> SiftResult<ResultSet> {
        self.search(query, self.config.default_limit)
    }

    /// Run both retrievals on the calling thread, semantic first.
    ///
    /// A collaborator failure is returned as-is unless `allow_degraded` is
    /// set, in which case a single failure yields the other signal's
    /// results with a [`DegradationNotice`].
    pub fn search(&self, query: &str, limit: usize) -> SiftResult<ResultSet> {
        let keywords = extract_keywords(query);
        debug!(keywords = ?keywords, "extracted keywords");

        let semantic = semantic_search(
            self.embedder.as_ref(),
            self.store.as_ref(),
            query,
            self.config.semantic_top_k,
        );
        let semantic = match semantic {
            Err(e) if !self.config.allow_degraded => return Err(e),
            other => other,
        };

        let keyword = keyword_search(
            self.store.as_ref(),
            &keywords,
            self.config.max_keywords,
            self.config.keyword_top_k,
        );

        self.assemble(semantic, keyword, limit)
    }

    /// Run both retrievals concurrently on blocking tasks, bounded by one
    /// shared `deadline`.
    ///
    /// Whichever finishes first, reconciliation still applies semantic
    /// candidates before keyword matches. A retrieval that misses the
    /// deadline is `RetrievalError::DeadlineExceeded`; its task is left to
    /// finish in the background. A deadline too large to represent as an
    /// instant leaves both retrievals unbounded.
    pub async fn search_with_deadline(
        &self,
        query: &str,
        limit: usize,
        deadline: Duration,
    ) -> SiftResult<ResultSet> {
        let keywords = extract_keywords(query);
        let deadline_ms = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX);
        debug!(keywords = ?keywords, deadline_ms, "extracted keywords");

        let deadline_at = Instant::now().checked_add(deadline);

        let semantic_task = {
            let embedder = Arc::clone(&self.embedder);
            let store = Arc::clone(&self.store);
            let query = query.to_string();
            let top_k = self.config.semantic_top_k;
            tokio::task::spawn_blocking(move || {
                semantic_search(embedder.as_ref(), store.as_ref(), &query, top_k)
            })
        };

        let keyword_task = {
            let store = Arc::clone(&self.store);
            let max_keywords = self.config.max_keywords;
            let top_k = self.config.keyword_top_k;
            tokio::task::spawn_blocking(move || {
                keyword_search(store.as_ref(), &keywords, max_keywords, top_k)
            })
        };

        let (semantic, keyword) = tokio::join!(
            bounded(deadline_at, semantic_task),
            bounded(deadline_at, keyword_task),
        );

        let semantic = flatten_task(semantic, MatchMethod::Semantic, deadline_ms);
        let keyword = flatten_task(keyword, MatchMethod::Keyword, deadline_ms);

        self.assemble(semantic, keyword, limit)
    }

    /// Search with the configured deadline.
    pub async fn search_with_configured_deadline(
        &self,
        query: &str,
        limit: usize,
    ) -> SiftResult<ResultSet> {
        let deadline = Duration::from_millis(self.config.deadline_ms);
        self.search_with_deadline(query, limit, deadline).await
    }

    fn assemble(
        &self,
        semantic: SiftResult<Vec<Candidate>>,
        keyword: SiftResult<Vec<Document>>,
        limit: usize,
    ) -> SiftResult<ResultSet> {
        let (semantic, keyword, notice) = match (semantic, keyword) {
            (Ok(s), Ok(k)) => (s, k, None),
            (Err(e), Ok(k)) if self.config.allow_degraded => {
                (Vec::new(), k, Some(degradation_notice(MatchMethod::Semantic, e.to_string())))
            }
            (Ok(s), Err(e)) if self.config.allow_degraded => {
                (s, Vec::new(), Some(degradation_notice(MatchMethod::Keyword, e.to_string())))
            }
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };

        let semantic_count = semantic.len();
        let keyword_count = keyword.len();
        let pool = reconcile(semantic, keyword);
        let pooled = pool.len();
        let mut results = rank_and_limit(pool, limit, self.config.coverage_policy);
        if let Some(notice) = notice {
            events::search_degraded(notice.failed_method, &notice.reason);
            results = results.with_degradation(notice);
        }

        events::search_completed(
            semantic_count,
            keyword_count,
            pooled,
            results.len(),
            results.is_degraded(),
        );
        Ok(results)
    }
}

fn degradation_notice(failed_method: MatchMethod, reason: String) -> DegradationNotice {
    DegradationNotice {
        failed_method,
        reason,
    }
}

/// Await `task`, giving up at `deadline_at` when there is one.
async fn bounded<T>(
    deadline_at: Option<Instant>,
    task: JoinHandle<T>,
) -> Result<Result<T, JoinError>, Elapsed> {
    match deadline_at {
        Some(at) => timeout_at(at, task).await,
        None => Ok(task.await),
    }
}

fn flatten_task<T>(
    outcome: Result<Result<SiftResult<T>, JoinError>, Elapsed>,
    method: MatchMethod,
    deadline_ms: u64,
) -> SiftResult<T> {
    match outcome {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(RetrievalError::TaskFailed {
            reason: format!("{method} task: {join_error}"),
        }
        .into()),
        Err(_) => {
            events::deadline_exceeded(method, deadline_ms);
            Err(RetrievalError::DeadlineExceeded {
                method: method.to_string(),
                deadline_ms,
            }
            .into())
        }
    }
}
