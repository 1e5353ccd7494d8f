//! Edge cases: blank queries, odd characters, missing fields.

use super::common::{build_test_index, make_doc, sample_catalog, scenario_index};
use exosearch::{Document, EngineConfig, ExerciseIndex};

#[test]
fn test_blank_queries_are_idle() {
    let index = scenario_index();
    for query in ["", " ", "   ", "\t", "\n "] {
        let outcome = index.search_hits(query, 100);
        assert!(outcome.hits.is_empty(), "query {:?}", query);
        assert_eq!(outcome.total, 0);
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let index = scenario_index();
    assert_eq!(index.search_hits("  pythagoras  ", 100).ids(), ["1"]);
}

#[test]
fn test_min_search_length() {
    let mut index = ExerciseIndex::with_config(EngineConfig {
        min_search_length: 3,
        ..EngineConfig::default()
    });
    index.build_index(sample_catalog());
    assert!(index.search("an", 100).is_empty());
    assert!(!index.search("ana", 100).is_empty());
}

#[test]
fn test_empty_index() {
    let index = ExerciseIndex::new();
    assert!(index.search("anything", 10).is_empty());
    assert!(index.search_by_category("x", 10).documents.is_empty());
    assert_eq!(index.statistics().total_documents, 0);
}

#[test]
fn test_regex_characters_are_literal() {
    let index = build_test_index(sample_catalog());
    let outcome = index.search_hits("x^(n", 10);
    assert_eq!(outcome.ids(), ["ana-1"]);
    assert_eq!(outcome.hits[0].score, 0);
    assert_eq!(
        outcome.hits[0].snippet.as_deref(),
        Some("La dérivée de x^n est n x^(n-1)....")
    );
    assert!(index.search(".*", 10).is_empty());
}

#[test]
fn test_unicode_case_folding() {
    let index = build_test_index(sample_catalog());
    let outcome = index.search_hits("ÉQUATIONS", 10);
    assert_eq!(outcome.ids(), ["alg-1"]);
    assert_eq!(outcome.hits[0].score, 150);
}

#[test]
fn test_match_may_span_adjacent_fields() {
    let index = build_test_index(sample_catalog());
    // Tags are joined with spaces in the full-text blob.
    let outcome = index.search_hits("triangle démonstration", 10);
    assert_eq!(outcome.ids(), ["geo-1"]);
    assert_eq!(outcome.hits[0].score, 0);
}

#[test]
fn test_title_only_records() {
    let index = build_test_index(vec![make_doc("a", "Limites"), Document::new("b")]);
    assert_eq!(index.search_hits("limites", 10).ids(), ["a"]);
    assert_eq!(index.len(), 2);
}

#[test]
fn test_records_from_json_with_numeric_ids_and_nulls() {
    let docs: Vec<Document> = serde_json::from_str(
        r#"[
            {"id": 1, "title": "Suites", "tags": null, "category": "analyse"},
            {"title": "Sans identifiant"},
            {"id": "", "title": "Vide"}
        ]"#,
    )
    .unwrap();
    let mut index = ExerciseIndex::new();
    let stats = index.build_index(docs);

    assert_eq!(stats.indexed_count, 1);
    assert_eq!(stats.skipped_count, 2);
    assert_eq!(index.search_hits("suites", 10).ids(), ["1"]);
}

#[test]
fn test_snippet_falls_back_to_extract() {
    let mut doc = make_doc("p", "Probabilités");
    doc.extract_snippet = Some("Loi binomiale...".into());
    let index = build_test_index(vec![doc]);
    let outcome = index.search_hits("proba", 10);
    assert_eq!(outcome.hits[0].snippet.as_deref(), Some("Loi binomiale..."));
}
