//! Relevance scoring and result order.
//!
//! Scores are additive: title contains (100), title prefix (+50), category
//! (20), each matching tag (15), description (10). Equal scores keep catalog
//! order.

use super::common::{build_test_index, ids, make_exercise, sample_catalog};
use exosearch::{EngineConfig, ExerciseIndex, ScoringWeights};

// ============================================================================
// FIELD WEIGHTS
// ============================================================================

#[test]
fn test_tag_and_description_stack() {
    let index = build_test_index(sample_catalog());
    let outcome = index.search_hits("triangle", 100);

    assert_eq!(outcome.ids(), ["geo-1"]);
    assert_eq!(outcome.hits[0].score, 15 + 10);
}

#[test]
fn test_title_prefix_plus_tag() {
    let index = build_test_index(sample_catalog());
    let outcome = index.search_hits("dérivée", 100);

    assert_eq!(outcome.ids(), ["ana-1"]);
    assert_eq!(outcome.hits[0].score, 100 + 50 + 15);
}

#[test]
fn test_inner_title_hit_with_description() {
    let index = build_test_index(sample_catalog());
    let outcome = index.search_hits("parties", 100);

    assert_eq!(outcome.ids(), ["ana-2"]);
    assert_eq!(outcome.hits[0].score, 100 + 10);
}

#[test]
fn test_higher_score_first_then_catalog_order() {
    let index = build_test_index(sample_catalog());
    let outcome = index.search_hits("calcul", 100);

    // Three tag hits tie at 15; "Calculer" in a description scores 10.
    assert_eq!(outcome.ids(), ["ana-1", "ana-2", "alg-1", "geo-1"]);
    let scores: Vec<u32> = outcome.hits.iter().map(|h| h.score).collect();
    assert_eq!(scores, [15, 15, 15, 10]);
}

#[test]
fn test_category_hits_tie_in_catalog_order() {
    let index = build_test_index(sample_catalog());
    let outcome = index.search_hits("analyse", 100);

    assert_eq!(outcome.ids(), ["ana-1", "ana-2"]);
    assert!(outcome.hits.iter().all(|h| h.score == 20));
}

#[test]
fn test_title_outranks_many_tags() {
    let index = build_test_index(vec![
        make_exercise("tags", "Exercices", "misc", &["vecteur", "vecteurs", "vecteur-unitaire"]),
        make_exercise("title", "Vecteurs du plan", "misc", &[]),
    ]);
    let outcome = index.search_hits("vecteur", 100);

    assert_eq!(outcome.ids(), ["title", "tags"]);
    assert_eq!(outcome.hits[0].score, 150);
    assert_eq!(outcome.hits[1].score, 45);
}

// ============================================================================
// CONFIGURABLE WEIGHTS
// ============================================================================

#[test]
fn test_custom_weights_change_order() {
    let docs = vec![
        make_exercise("x", "Angles", "misc", &[]),
        make_exercise("y", "Misc", "misc", &["angles"]),
    ];

    let default = build_test_index(docs.clone());
    assert_eq!(default.search_hits("angles", 10).ids(), ["x", "y"]);

    let mut tuned = ExerciseIndex::with_config(EngineConfig {
        weights: ScoringWeights {
            tag: 200,
            ..ScoringWeights::default()
        },
        ..EngineConfig::default()
    });
    tuned.build_index(docs);
    let outcome = tuned.search_hits("angles", 10);
    assert_eq!(outcome.ids(), ["y", "x"]);
    assert_eq!(outcome.hits[0].score, 200);
}

#[test]
fn test_weights_from_json_config() {
    let config = EngineConfig::from_json_str(r#"{"weights": {"titlePrefix": 0}}"#).unwrap();
    let mut index = ExerciseIndex::with_config(config);
    index.build_index(sample_catalog());

    let outcome = index.search_hits("dérivée", 10);
    assert_eq!(outcome.hits[0].score, 100 + 15);
}

// ============================================================================
// RESULT SHAPE
// ============================================================================

#[test]
fn test_scores_never_increase_down_the_list() {
    let index = build_test_index(sample_catalog());
    for query in ["e", "a", "calcul", "é", "par"] {
        let outcome = index.search_hits(query, 100);
        for pair in outcome.hits.windows(2) {
            assert!(pair[0].score >= pair[1].score, "query {:?}", query);
            if pair[0].score == pair[1].score {
                assert!(pair[0].position < pair[1].position, "query {:?}", query);
            }
        }
    }
}

#[test]
fn test_search_returns_documents_in_hit_order() {
    let index = build_test_index(sample_catalog());
    let docs = index.search("calcul", 2);
    assert_eq!(ids(&docs), ["ana-1", "ana-2"]);
}
