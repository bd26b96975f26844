use serde::{Deserialize, Serialize};

use super::defaults;

/// How the coverage pass of diversified truncation treats the result limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoveragePolicy {
    /// The coverage pass stops once `limit` results are selected, so the
    /// result never exceeds `limit`.
    #[default]
    Capped,
    /// The coverage pass takes one document per distinct source regardless
    /// of `limit`; the result can exceed `limit` when sources outnumber it.
    Uncapped,
}

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Nearest neighbours requested from the vector query.
    pub semantic_top_k: usize,
    /// Maximum documents requested from the keyword query.
    pub keyword_top_k: usize,
    /// Only the first `max_keywords` extracted keywords reach the store.
    pub max_keywords: usize,
    /// Result limit used when the caller does not supply one.
    pub default_limit: usize,
    /// Coverage pass policy.
    pub coverage_policy: CoveragePolicy,
    /// Per-request deadline for concurrent retrieval, in milliseconds.
    pub deadline_ms: u64,
    /// Return single-signal results with a notice instead of failing when
    /// one retriever errors.
    pub allow_degraded: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            semantic_top_k: defaults::DEFAULT_SEMANTIC_TOP_K,
            keyword_top_k: defaults::DEFAULT_KEYWORD_TOP_K,
            max_keywords: defaults::DEFAULT_MAX_KEYWORDS,
            default_limit: defaults::DEFAULT_RESULT_LIMIT,
            coverage_policy: CoveragePolicy::default(),
            deadline_ms: defaults::DEFAULT_DEADLINE_MS,
            allow_degraded: defaults::DEFAULT_ALLOW_DEGRADED,
        }
    }
}
