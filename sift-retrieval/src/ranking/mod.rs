//! Ranking and diversified truncation.
//!
//! 1. Stable sort by similarity, descending. Ties keep discovery order.
//! 2. Coverage pass: the best candidate of each distinct source.
//! 3. Fill pass: remaining candidates by score until `limit`.
//!
//! The result is returned in assembly order (coverage picks, then fill
//! picks), not re-sorted.

use std::cmp::Ordering;
use std::collections::HashSet;

use sift_core::config::CoveragePolicy;
use sift_core::models::{Candidate, ResultSet};
use tracing::debug;

use crate::reconcile::CandidatePool;

pub fn rank_and_limit(pool: CandidatePool, limit: usize, policy: CoveragePolicy) -> ResultSet {
    let sorted = sort_by_similarity(pool.into_candidates());
    let picks = select(&sorted, limit, policy);

    let mut slots: Vec<Option<Candidate>> = sorted.into_iter().map(Some).collect();
    let ranked: Vec<Candidate> = picks.iter().filter_map(|&i| slots[i].take()).collect();

    debug!(results = ranked.len(), limit, ?policy, "ranked");
    ResultSet::new(ranked)
}

/// Stable descending sort. NaN compares equal so it never reorders ties.
pub fn sort_by_similarity(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    candidates
}

/// Indices into `sorted`, in assembly order.
fn select(sorted: &[Candidate], limit: usize, policy: CoveragePolicy) -> Vec<usize> {
    let mut picks: Vec<usize> = Vec::with_capacity(limit.min(sorted.len()));
    let mut picked_urls: HashSet<&str> = HashSet::new();
    let mut seen_sources: HashSet<&str> = HashSet::new();

    for (i, candidate) in sorted.iter().enumerate() {
        if policy == CoveragePolicy::Capped && picks.len() >= limit {
            break;
        }
        if seen_sources.insert(candidate.source()) {
            picks.push(i);
            picked_urls.insert(candidate.url());
        }
    }

    for (i, candidate) in sorted.iter().enumerate() {
        if picks.len() >= limit {
            break;
        }
        if picked_urls.insert(candidate.url()) {
            picks.push(i);
        }
    }

    picks
}

#[cfg(test)]
mod tests {
    use sift_core::models::{Document, MatchMethod};

    use super::*;
    use crate::reconcile::reconcile;

    fn cand(url: &str, source: &str, similarity: f64) -> Candidate {
        Candidate::new(
            Document::new(url, url, "", source),
            similarity,
            MatchMethod::Semantic,
        )
    }

    fn pool(cands: Vec<Candidate>) -> CandidatePool {
        reconcile(cands, Vec::new())
    }

    fn shape(rs: &ResultSet) -> Vec<(String, f64)> {
        rs.candidates()
            .iter()
            .map(|c| (c.source().to_string(), c.similarity))
            .collect()
    }

    #[test]
    fn coverage_picks_distinct_sources_before_scores() {
        let rs = rank_and_limit(
            pool(vec![
                cand("a1", "A", 0.9),
                cand("a2", "A", 0.8),
                cand("b1", "B", 0.5),
                cand("c1", "C", 0.4),
            ]),
            2,
            CoveragePolicy::Capped,
        );
        assert_eq!(
            shape(&rs),
            vec![("A".to_string(), 0.9), ("B".to_string(), 0.5)]
        );
    }

    #[test]
    fn uncapped_coverage_can_exceed_limit() {
        let rs = rank_and_limit(
            pool(vec![
                cand("a1", "A", 0.9),
                cand("a2", "A", 0.8),
                cand("b1", "B", 0.5),
                cand("c1", "C", 0.4),
            ]),
            2,
            CoveragePolicy::Uncapped,
        );
        assert_eq!(rs.urls(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn fill_pass_follows_coverage_in_score_order() {
        let rs = rank_and_limit(
            pool(vec![
                cand("a1", "A", 0.9),
                cand("a2", "A", 0.8),
                cand("b1", "B", 0.5),
                cand("a3", "A", 0.3),
            ]),
            4,
            CoveragePolicy::Capped,
        );
        assert_eq!(rs.urls(), vec!["a1", "b1", "a2", "a3"]);
    }

    #[test]
    fn ties_keep_discovery_order() {
        let rs = rank_and_limit(
            pool(vec![
                cand("x", "A", 0.5),
                cand("y", "A", 0.5),
                cand("z", "A", 0.5),
            ]),
            3,
            CoveragePolicy::Capped,
        );
        assert_eq!(rs.urls(), vec!["x", "y", "z"]);
    }

    #[test]
    fn keyword_hit_outranks_semantic_and_wins_coverage() {
        let semantic = vec![
            cand("b82", "blog", 0.82),
            cand("b77", "blog", 0.77),
            cand("b65", "blog", 0.65),
        ];
        let keyword = vec![Document::new("inc", "INC tempdb", "", "servicenow")];
        let rs = rank_and_limit(reconcile(semantic, keyword), 4, CoveragePolicy::Capped);

        assert_eq!(rs.urls(), vec!["inc", "b82", "b77", "b65"]);
        assert_eq!(rs.candidates()[0].method, MatchMethod::Keyword);
        assert_eq!(rs.candidates()[0].similarity, 1.0);
    }

    #[test]
    fn limit_larger_than_pool_returns_everything() {
        let rs = rank_and_limit(
            pool(vec![cand("a", "A", 0.2), cand("b", "B", 0.9)]),
            10,
            CoveragePolicy::Capped,
        );
        assert_eq!(rs.urls(), vec!["b", "a"]);
    }

    #[test]
    fn zero_limit_capped_is_empty() {
        let rs = rank_and_limit(pool(vec![cand("a", "A", 0.2)]), 0, CoveragePolicy::Capped);
        assert!(rs.is_empty());
    }

    #[test]
    fn empty_pool_is_empty() {
        assert!(rank_and_limit(CandidatePool::new(), 5, CoveragePolicy::Capped).is_empty());
    }
}
