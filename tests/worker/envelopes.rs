//! Wire format of every action through `IndexWorker::handle_json`.

use super::common::sample_catalog;
use exosearch::worker::IndexWorker;
use exosearch::EngineConfig;
use serde_json::{json, Value};

fn loaded_worker() -> IndexWorker {
    let mut worker = IndexWorker::new(EngineConfig::default());
    let payload = serde_json::to_value(sample_catalog()).unwrap();
    let response = worker.handle_value(json!({"action": "INDEX_EXERCISES", "payload": payload}));
    assert!(response.success);
    worker
}

fn send(worker: &mut IndexWorker, message: Value) -> Value {
    serde_json::to_value(worker.handle_value(message)).unwrap()
}

fn result_ids(data: &Value) -> Vec<&str> {
    data["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["id"].as_str().unwrap())
        .collect()
}

// ============================================================================
// SUCCESS ENVELOPES
// ============================================================================

#[test]
fn test_index_exercises_reports_counts() {
    let mut worker = IndexWorker::new(EngineConfig::default());
    let response = send(
        &mut worker,
        json!({
            "action": "INDEX_EXERCISES",
            "payload": [
                {"id": "a", "title": "Limites"},
                {"id": 7, "title": "Suites"},
                {"title": "Sans identifiant"}
            ]
        }),
    );

    assert_eq!(response["success"], true);
    assert_eq!(response["action"], "INDEX_EXERCISES_COMPLETE");
    assert_eq!(response["data"]["indexedCount"], 2);
    assert_eq!(response["data"]["skippedCount"], 1);
    assert_eq!(response["data"]["totalExercises"], 2);
    assert!(response["data"]["durationMs"].is_u64());
    assert!(response["timestamp"].is_string());
    assert!(response.get("error").is_none());
}

#[test]
fn test_index_exercises_passes_sizes_through() {
    let mut worker = IndexWorker::new(EngineConfig::default());
    let response = send(
        &mut worker,
        json!({
            "action": "INDEX_EXERCISES",
            "payload": [
                {"id": "a", "title": "Vecteurs", "size": "1.2 KB"},
                {"id": "b", "title": "Angles", "size": 1536.5},
                {"id": "c", "title": "Limites", "size": -1},
                {"id": "d", "title": "Suites", "size": 2048}
            ]
        }),
    );

    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["indexedCount"], 4);

    let response = send(&mut worker, json!({"action": "GET_EXERCISE", "payload": {"id": "a"}}));
    assert_eq!(response["data"]["exercise"]["size"], "1.2 KB");
    let response = send(&mut worker, json!({"action": "GET_EXERCISE", "payload": {"id": "b"}}));
    assert_eq!(response["data"]["exercise"]["size"], 1536.5);
    let response = send(&mut worker, json!({"action": "GET_EXERCISE", "payload": {"id": "d"}}));
    assert_eq!(response["data"]["exercise"]["size"], 2048);
}

#[test]
fn test_search_echoes_query() {
    let mut worker = loaded_worker();
    let response = send(
        &mut worker,
        json!({"action": "SEARCH", "payload": {"query": "calcul", "limit": 2}}),
    );

    assert_eq!(response["action"], "SEARCH_COMPLETE");
    assert_eq!(response["data"]["query"], "calcul");
    assert_eq!(response["data"]["totalResults"], 4);
    assert_eq!(result_ids(&response["data"]), ["ana-1", "ana-2"]);
}

#[test]
fn test_search_without_payload_is_idle() {
    let mut worker = loaded_worker();
    let response = send(&mut worker, json!({"action": "SEARCH"}));

    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["totalResults"], 0);
    assert!(response["data"]["query"].is_null());
}

#[test]
fn test_category_and_difficulty_lookups() {
    let mut worker = loaded_worker();

    let response = send(
        &mut worker,
        json!({"action": "SEARCH_BY_CATEGORY", "payload": {"category": "analyse"}}),
    );
    assert_eq!(response["action"], "SEARCH_BY_CATEGORY_COMPLETE");
    assert_eq!(response["data"]["category"], "analyse");
    assert_eq!(result_ids(&response["data"]), ["ana-1", "ana-2"]);

    let response = send(
        &mut worker,
        json!({"action": "SEARCH_BY_DIFFICULTY", "payload": {"difficulty": "moyen", "limit": 1}}),
    );
    assert_eq!(response["action"], "SEARCH_BY_DIFFICULTY_COMPLETE");
    assert_eq!(response["data"]["totalResults"], 2);
    assert_eq!(result_ids(&response["data"]), ["geo-2"]);
}

#[test]
fn test_tags_any_and_all() {
    let mut worker = loaded_worker();

    let response = send(
        &mut worker,
        json!({"action": "SEARCH_BY_TAGS", "payload": {"tags": ["calcul", "triangle"]}}),
    );
    assert_eq!(response["action"], "SEARCH_BY_TAGS_COMPLETE");
    assert_eq!(response["data"]["totalResults"], 4);
    assert_eq!(response["data"]["tags"], json!(["calcul", "triangle"]));

    let response = send(
        &mut worker,
        json!({"action": "SEARCH_BY_TAGS", "payload": {"tags": ["calcul", "dérivée"], "matchAll": true}}),
    );
    assert_eq!(result_ids(&response["data"]), ["ana-1"]);
}

#[test]
fn test_get_exercise_found_and_missing() {
    let mut worker = loaded_worker();

    let response = send(&mut worker, json!({"action": "GET_EXERCISE", "payload": {"id": "geo-1"}}));
    assert_eq!(response["action"], "GET_EXERCISE_COMPLETE");
    assert_eq!(response["data"]["found"], true);
    assert_eq!(response["data"]["exercise"]["title"], "Théorème de Pythagore");

    let response = send(&mut worker, json!({"action": "GET_EXERCISE", "payload": {"id": "nope"}}));
    assert_eq!(response["data"]["found"], false);
    assert!(response["data"]["exercise"].is_null());
}

#[test]
fn test_statistics_shape() {
    let mut worker = loaded_worker();
    let response = send(&mut worker, json!({"action": "GET_STATISTICS"}));

    assert_eq!(response["action"], "STATISTICS_COMPLETE");
    let data = &response["data"];
    assert_eq!(data["totalExercises"], 5);
    assert_eq!(data["categories"], 3);
    assert_eq!(data["difficulties"], 3);
    assert_eq!(data["categoriesBreakdown"]["géométrie"], 2);
    assert_eq!(data["difficultiesBreakdown"]["facile"], 2);
    assert_eq!(data["tagsBreakdown"]["calcul"], 3);
}

#[test]
fn test_update_then_remove() {
    let mut worker = loaded_worker();

    let response = send(
        &mut worker,
        json!({
            "action": "UPDATE_EXERCISE",
            "payload": {"exercise": {"id": "geo-2", "title": "Cercles", "category": "algèbre"}}
        }),
    );
    assert_eq!(response["action"], "UPDATE_EXERCISE_COMPLETE");
    assert_eq!(response["data"]["exerciseId"], "geo-2");
    assert_eq!(response["data"]["updated"], true);
    assert_eq!(worker.index().search_by_category("algèbre", 10).ids(), ["alg-1", "geo-2"]);

    let response = send(&mut worker, json!({"action": "REMOVE_EXERCISE", "payload": {"id": "geo-2"}}));
    assert_eq!(response["action"], "REMOVE_EXERCISE_COMPLETE");
    assert_eq!(response["data"]["removed"], true);

    let response = send(&mut worker, json!({"action": "REMOVE_EXERCISE", "payload": {"id": "geo-2"}}));
    assert_eq!(response["data"]["removed"], false);
    assert_eq!(worker.index().len(), 4);
}

#[test]
fn test_clear_index() {
    let mut worker = loaded_worker();
    let response = send(&mut worker, json!({"action": "CLEAR_INDEX"}));

    assert_eq!(response["action"], "CLEAR_INDEX_COMPLETE");
    assert_eq!(response["data"]["message"], "Index cleared successfully");
    assert!(worker.index().is_empty());
}

// ============================================================================
// FAILURE ENVELOPES
// ============================================================================

fn assert_failure(response: &Value, message: &str) {
    assert_eq!(response["success"], false);
    assert_eq!(response["error"], message);
    assert!(response.get("action").is_none());
    assert!(response.get("data").is_none());
    assert!(response["timestamp"].is_string());
}

#[test]
fn test_unknown_action() {
    let mut worker = loaded_worker();
    let response = send(&mut worker, json!({"action": "REINDEX"}));
    assert_failure(&response, "Unknown action: REINDEX");
}

#[test]
fn test_index_payload_must_be_array() {
    let mut worker = loaded_worker();
    let response = send(&mut worker, json!({"action": "INDEX_EXERCISES", "payload": {"id": "x"}}));
    assert_failure(&response, "Exercises must be an array");
    assert_eq!(worker.index().len(), 5);
}

#[test]
fn test_update_without_id() {
    let mut worker = loaded_worker();

    let response = send(
        &mut worker,
        json!({"action": "UPDATE_EXERCISE", "payload": {"exercise": {"title": "Orpheline"}}}),
    );
    assert_failure(&response, "Exercise must have an id");

    let response = send(&mut worker, json!({"action": "UPDATE_EXERCISE", "payload": {}}));
    assert_failure(&response, "Exercise must have an id");
    assert_eq!(worker.index().len(), 5);
}

#[test]
fn test_wrong_payload_shape() {
    let mut worker = loaded_worker();
    let response = send(&mut worker, json!({"action": "SEARCH_BY_TAGS", "payload": {"tags": "calcul"}}));

    assert_eq!(response["success"], false);
    let error = response["error"].as_str().unwrap();
    assert!(error.starts_with("Error processing action SEARCH_BY_TAGS"), "{}", error);
}

#[test]
fn test_malformed_messages() {
    let mut worker = loaded_worker();

    let response = serde_json::to_value(worker.handle_json("{not json")).unwrap();
    assert_eq!(response["success"], false);
    assert!(response["error"].as_str().unwrap().starts_with("Malformed message"));

    let response = send(&mut worker, json!({"payload": []}));
    assert_eq!(response["success"], false);

    assert_eq!(worker.index().len(), 5);
}

#[test]
fn test_worker_survives_failures() {
    let mut worker = loaded_worker();
    for _ in 0..3 {
        send(&mut worker, json!({"action": "NOPE"}));
    }
    let response = send(&mut worker, json!({"action": "SEARCH", "payload": {"query": "pythagore"}}));
    assert_eq!(result_ids(&response["data"]), ["geo-1"]);
}
