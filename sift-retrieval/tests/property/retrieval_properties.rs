//! Property tests: reconciliation and ranking invariants over arbitrary
//! candidate pools.

use std::collections::HashSet;

use proptest::prelude::*;

use sift_core::config::CoveragePolicy;
use sift_core::models::{Candidate, Document, MatchMethod};
use sift_retrieval::{extract_keywords, rank_and_limit, reconcile};

const SOURCES: &[&str] = &["blog", "documentation", "microsoft", "servicenow"];

fn document(url_id: u8, source_id: usize) -> Document {
    Document::new(format!("u{url_id}"), "t", "c", SOURCES[source_id % SOURCES.len()])
}

fn semantic_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec((0u8..30, 0usize..4, 0.0f64..=1.0), 0..20).prop_map(|raw| {
        raw.into_iter()
            .map(|(u, s, sim)| Candidate::new(document(u, s), sim, MatchMethod::Semantic))
            .collect()
    })
}

fn keyword_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((0u8..30, 0usize..4), 0..15)
        .prop_map(|raw| raw.into_iter().map(|(u, s)| document(u, s)).collect())
}

fn policy_strategy() -> impl Strategy<Value = CoveragePolicy> {
    prop_oneof![Just(CoveragePolicy::Capped), Just(CoveragePolicy::Uncapped)]
}

proptest! {
    #[test]
    fn prop_urls_unique(
        semantic in semantic_strategy(),
        keyword in keyword_strategy(),
        limit in 0usize..12,
        policy in policy_strategy(),
    ) {
        let rs = rank_and_limit(reconcile(semantic, keyword), limit, policy);
        let urls: HashSet<&str> = rs.urls().into_iter().collect();
        prop_assert_eq!(urls.len(), rs.len());
    }

    #[test]
    fn prop_capped_respects_limit(
        semantic in semantic_strategy(),
        keyword in keyword_strategy(),
        limit in 0usize..12,
    ) {
        let pool = reconcile(semantic, keyword);
        let available = pool.len();
        let rs = rank_and_limit(pool, limit, CoveragePolicy::Capped);
        prop_assert_eq!(rs.len(), limit.min(available));
    }

    #[test]
    fn prop_uncapped_bounded_by_limit_or_sources(
        semantic in semantic_strategy(),
        keyword in keyword_strategy(),
        limit in 0usize..12,
    ) {
        let pool = reconcile(semantic, keyword);
        let sources: HashSet<String> = pool.iter().map(|c| c.source().to_string()).collect();
        let rs = rank_and_limit(pool, limit, CoveragePolicy::Uncapped);
        prop_assert!(rs.len() <= limit.max(sources.len()));
    }

    #[test]
    fn prop_keyword_scores_are_exactly_one(
        semantic in semantic_strategy(),
        keyword in keyword_strategy(),
    ) {
        let keyword_urls: HashSet<String> = keyword.iter().map(|d| d.url.clone()).collect();
        let pool = reconcile(semantic, keyword);
        for c in pool.iter() {
            if keyword_urls.contains(c.url()) {
                prop_assert_eq!(c.similarity, 1.0);
                prop_assert!(c.method != MatchMethod::Semantic);
            } else {
                prop_assert_eq!(c.method, MatchMethod::Semantic);
            }
        }
    }

    #[test]
    fn prop_keyword_match_iff_in_both(
        semantic in semantic_strategy(),
        keyword in keyword_strategy(),
    ) {
        let semantic_urls: HashSet<String> = semantic.iter().map(|c| c.document.url.clone()).collect();
        let keyword_urls: HashSet<String> = keyword.iter().map(|d| d.url.clone()).collect();
        let pool = reconcile(semantic, keyword);
        for c in pool.iter() {
            let both = semantic_urls.contains(c.url()) && keyword_urls.contains(c.url());
            prop_assert_eq!(c.method == MatchMethod::KeywordMatch, both);
        }
    }

    #[test]
    fn prop_coverage_prefix_has_distinct_sources(
        semantic in semantic_strategy(),
        keyword in keyword_strategy(),
        limit in 1usize..12,
    ) {
        let pool = reconcile(semantic, keyword);
        let distinct: HashSet<String> = pool.iter().map(|c| c.source().to_string()).collect();
        let rs = rank_and_limit(pool, limit, CoveragePolicy::Capped);
        let prefix = distinct.len().min(limit);
        let prefix_sources: HashSet<&str> =
            rs.candidates()[..prefix].iter().map(|c| c.source()).collect();
        prop_assert_eq!(prefix_sources.len(), prefix);
    }

    #[test]
    fn prop_ranking_is_deterministic(
        semantic in semantic_strategy(),
        keyword in keyword_strategy(),
        limit in 0usize..12,
    ) {
        let a = rank_and_limit(reconcile(semantic.clone(), keyword.clone()), limit, CoveragePolicy::Capped);
        let b = rank_and_limit(reconcile(semantic, keyword), limit, CoveragePolicy::Capped);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_keywords_are_clean(query in "[ a-zA-Z?!.,;:'\"()]{0,60}") {
        for kw in extract_keywords(&query) {
            prop_assert!(kw.chars().count() > 2);
            prop_assert_eq!(kw.clone(), kw.to_lowercase());
            prop_assert!(!sift_retrieval::preprocess::is_stop_word(&kw));
            prop_assert!(!kw.contains(char::is_whitespace));
            prop_assert!(!kw.starts_with(['?', '!', '.', ',', ';', ':', '"', '\'', '(', ')']));
            prop_assert!(!kw.ends_with(['?', '!', '.', ',', ';', ':', '"', '\'', '(', ')']));
        }
    }
}
