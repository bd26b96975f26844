//! Property tests: nearest ordering, keyword matching agrees with a
//! reference substring check, upsert idempotence.

use proptest::prelude::*;

use sift_core::models::Document;
use sift_core::traits::IDocumentStore;
use sift_storage::StorageEngine;

fn vector_strategy() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, 4)
}

proptest! {
    #[test]
    fn prop_nearest_is_sorted_and_bounded(
        vectors in prop::collection::vec(vector_strategy(), 1..20),
        query in vector_strategy(),
        k in 1usize..25,
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        for (i, v) in vectors.iter().enumerate() {
            let d = Document::new(format!("u{i}"), "t", "c", "blog").with_embedding(v.clone());
            engine.upsert(&d).unwrap();
        }

        let results = engine.nearest(&query, k).unwrap();
        prop_assert!(results.len() <= k);
        prop_assert!(results.len() <= vectors.len());
        for w in results.windows(2) {
            prop_assert!(w[0].1 <= w[1].1);
        }
        for (_, distance) in &results {
            prop_assert!((0.0..=2.0 + 1e-9).contains(distance));
        }
    }

    #[test]
    fn prop_match_any_agrees_with_substring_check(
        titles in prop::collection::vec("[a-zA-Z %_']{0,20}", 1..12),
        keyword in "[a-zA-Z%_']{1,3}",
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        for (i, t) in titles.iter().enumerate() {
            engine.upsert(&Document::new(format!("u{i}"), t.clone(), "", "blog")).unwrap();
        }

        let needle = keyword.to_lowercase();
        let expected: Vec<String> = titles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.to_lowercase().contains(&needle))
            .map(|(i, _)| format!("u{i}"))
            .collect();

        let got: Vec<String> = engine
            .match_any(&[keyword], titles.len())
            .unwrap()
            .into_iter()
            .map(|d| d.url)
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_repeated_upsert_keeps_one_row(times in 1usize..6) {
        let engine = StorageEngine::open_in_memory().unwrap();
        for i in 0..times {
            engine
                .upsert(&Document::new("same", format!("v{i}"), "c", "blog"))
                .unwrap();
        }
        prop_assert_eq!(engine.count().unwrap(), 1);
        let title = engine.get("same").unwrap().unwrap().title;
        prop_assert_eq!(title, format!("v{}", times - 1));
    }
}
