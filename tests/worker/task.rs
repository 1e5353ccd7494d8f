//! The spawned worker task: ordered, one reply per request.

use super::common::{make_exercise, sample_catalog};
use exosearch::worker::{Reply, Request, RequestEnvelope, SearchParams, WorkerHandle};
use exosearch::EngineConfig;
use serde_json::json;

#[tokio::test]
async fn test_load_then_query() {
    let worker = WorkerHandle::spawn(EngineConfig::default());

    let stats = worker.index_exercises(sample_catalog()).await.unwrap();
    assert_eq!(stats.indexed_count, 5);

    let reply = worker
        .search(SearchParams {
            query: Some("Pythagore".to_string()),
            ..SearchParams::default()
        })
        .await
        .unwrap();
    assert_eq!(reply.total_results, 1);
    assert_eq!(reply.results[0].id, "geo-1");

    let stats = worker.statistics().await.unwrap();
    assert_eq!(stats.total_documents, 5);
}

#[tokio::test]
async fn test_writes_are_seen_by_later_reads() {
    let worker = WorkerHandle::spawn(EngineConfig::default());
    worker.index_exercises(sample_catalog()).await.unwrap();

    let updated = worker
        .update_exercise(make_exercise("geo-1", "Pythagore revisité", "géométrie", &["triangle"]))
        .await
        .unwrap();
    assert!(updated.updated);

    let doc = worker.get_exercise("geo-1").await.unwrap().unwrap();
    assert_eq!(doc.title.as_deref(), Some("Pythagore revisité"));

    let removed = worker.remove_exercise("geo-1").await.unwrap();
    assert!(removed.removed);
    assert!(worker.get_exercise("geo-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_errors_come_back_as_results() {
    let worker = WorkerHandle::spawn(EngineConfig::default());
    let err = worker
        .update_exercise(make_exercise("", "Orpheline", "x", &[]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Exercise must have an id");

    let stats = worker.statistics().await.unwrap();
    assert_eq!(stats.total_documents, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_callers_each_get_one_reply() {
    let worker = WorkerHandle::spawn(EngineConfig::default());
    worker.index_exercises(sample_catalog()).await.unwrap();

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let worker = worker.clone();
            tokio::spawn(async move {
                let id = if i % 2 == 0 { "ana-1" } else { "alg-1" };
                (id, worker.get_exercise(id).await)
            })
        })
        .collect();

    for task in tasks {
        let (id, result) = task.await.unwrap();
        assert_eq!(result.unwrap().unwrap().id, id);
    }
}

#[tokio::test]
async fn test_envelopes_through_the_task() {
    let worker = WorkerHandle::spawn(EngineConfig::default());

    let response = worker
        .envelope(RequestEnvelope::new("INDEX_EXERCISES", serde_json::to_value(sample_catalog()).unwrap()))
        .await;
    assert!(response.success);
    assert_eq!(response.action.as_deref(), Some("INDEX_EXERCISES_COMPLETE"));

    let response = worker.envelope(RequestEnvelope::new("FLUSH", json!(null))).await;
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Unknown action: FLUSH"));

    let reply = worker.request(Request::ClearIndex).await.unwrap();
    assert!(matches!(reply, Reply::Cleared(_)));
}
