//! Structural invariants after arbitrary write sequences.

use super::common::assert_index_well_formed;
use super::{apply, document_strategy, op_strategy, value_strategy};
use exosearch::ExerciseIndex;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Buckets, full text and store never drift apart.
    #[test]
    fn prop_index_stays_well_formed(ops in prop::collection::vec(op_strategy(), 0..25)) {
        let mut index = ExerciseIndex::new();
        for op in ops {
            apply(&mut index, op);
            assert_index_well_formed(&index);
        }
    }

    /// One full-text entry per stored document.
    #[test]
    fn prop_full_text_matches_store(ops in prop::collection::vec(op_strategy(), 0..25)) {
        let mut index = ExerciseIndex::new();
        for op in ops {
            apply(&mut index, op);
        }
        let stored: HashSet<&str> = index.documents().map(|d| d.id.as_str()).collect();
        let texts: HashSet<&str> = index.full_text().iter().map(|e| e.id.as_str()).collect();
        prop_assert_eq!(index.full_text().len(), index.len());
        prop_assert_eq!(stored, texts);
    }

    /// Statistics agree with the buckets they summarize.
    #[test]
    fn prop_statistics_match_buckets(docs in prop::collection::vec(document_strategy(), 0..20)) {
        let mut index = ExerciseIndex::new();
        index.build_index(docs);
        let stats = index.statistics();

        prop_assert_eq!(stats.total_documents, index.len());
        prop_assert_eq!(stats.categories, stats.categories_breakdown.len());
        prop_assert_eq!(stats.tags, stats.tags_breakdown.len());
        prop_assert!(stats.categories_breakdown.values().all(|&n| n > 0));
        prop_assert!(stats.tags_breakdown.values().all(|&n| n > 0));
        for (category, count) in &stats.categories_breakdown {
            prop_assert_eq!(*count, index.search_by_category(category, usize::MAX).total);
        }
    }

    /// Results are sorted by score, ties by catalog position, and every hit
    /// really contains the query.
    #[test]
    fn prop_search_respects_ranking(
        docs in prop::collection::vec(document_strategy(), 0..20),
        query in value_strategy(),
    ) {
        let mut index = ExerciseIndex::new();
        index.build_index(docs);
        let outcome = index.search_hits(&query, usize::MAX);

        let needle = query.trim().to_lowercase();
        prop_assert_eq!(outcome.total, outcome.hits.len());
        for hit in &outcome.hits {
            prop_assert!(index.full_text()[hit.position].text.contains(&needle));
        }
        for pair in outcome.hits.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].position < pair[1].position)
            );
        }
    }

    /// The limit only truncates; it never reorders.
    #[test]
    fn prop_limit_is_a_prefix(
        docs in prop::collection::vec(document_strategy(), 0..20),
        query in value_strategy(),
        limit in 0usize..6,
    ) {
        let mut index = ExerciseIndex::new();
        index.build_index(docs);
        let all = index.search_hits(&query, usize::MAX).ids();
        let some = index.search_hits(&query, limit).ids();
        prop_assert_eq!(&all[..some.len()], &some[..]);
        prop_assert_eq!(some.len(), all.len().min(limit));
    }
}
