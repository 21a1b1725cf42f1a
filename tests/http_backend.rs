//! Backend client tests against a mocked BabbageBox server.
//!
//! These use wiremock to check the exact requests the client sends and how
//! the stores react to the responses.

use std::sync::Arc;

use babbagebox::api::{ApiError, BackendApi, HttpBackend};
use babbagebox::store::{MemoryStore, ModelResolver, MutationOutcome};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============= Helper Functions =============

fn mock_memories() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "content": "First memory",
            "conversation_id": 101,
            "created_at": "2025-01-01T12:00:00Z"
        },
        {
            "id": 2,
            "content": "Second memory regarding AI",
            "conversation_id": 102,
            "created_at": "2025-01-02T12:00:00Z"
        }
    ])
}

async fn mount_json(server: &MockServer, verb: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| format!("{} {}", request.method, request.url.path()))
        .collect()
}

// ============= Client =============

#[tokio::test]
async fn test_get_config() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "GET",
        "/api/config",
        json!({
            "llama_model_path": "models/phi-2.Q4_K_M.gguf",
            "current_model": "phi-2.Q4_K_M.gguf"
        }),
    )
    .await;

    let backend = HttpBackend::new(server.uri());
    let config = backend.get_config().await.unwrap();

    assert_eq!(config.display_name(), "phi-2.Q4_K_M.gguf");
    assert_eq!(config.model_file_name().as_deref(), Some("phi-2.Q4_K_M.gguf"));
}

#[tokio::test]
async fn test_unexpected_shapes_fall_back_to_defaults() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/api/config", json!(["not", "an", "object"])).await;
    mount_json(&server, "GET", "/api/conversations", json!({ "items": [] })).await;
    Mock::given(method("GET"))
        .and(path("/api/memory"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());

    assert_eq!(backend.get_config().await.unwrap().display_name(), "Unknown");
    assert!(backend.list_conversations().await.unwrap().is_empty());
    assert!(backend.list_memories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/memory"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let err = backend.list_memories().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_delete_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/memory/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    backend.delete_memory(1).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_update_sends_json_content() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/memory/1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "content": "Updated content" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "content": "Updated content",
            "conversation_id": 101,
            "created_at": "2025-01-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(server.uri());
    let updated = backend.update_memory(1, "Updated content").await.unwrap();

    assert_eq!(updated.map(|record| record.content).as_deref(), Some("Updated content"));
}

// ============= Stores over HTTP =============

#[tokio::test]
async fn test_mount_and_model_set_request_sequence() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "GET",
        "/api/config",
        json!({ "llama_model_path": "models/gemma-2b.Q4_K_M.gguf" }),
    )
    .await;
    mount_json(&server, "GET", "/api/conversations", json!([])).await;

    let resolver = ModelResolver::new(Arc::new(HttpBackend::new(server.uri())));
    resolver.mount().await;
    assert_eq!(
        request_paths(&server).await,
        vec!["GET /api/config", "GET /api/conversations"]
    );

    resolver.on_model_set().await;
    assert_eq!(
        request_paths(&server).await,
        vec!["GET /api/config", "GET /api/conversations", "GET /api/config"]
    );
    assert_eq!(resolver.model_name(), "Unknown");
}

#[tokio::test]
async fn test_memory_store_delete_and_update() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/api/memory", mock_memories()).await;
    Mock::given(method("DELETE"))
        .and(path("/api/memory/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    mount_json(
        &server,
        "PUT",
        "/api/memory/2",
        json!({
            "id": 2,
            "content": "Edited",
            "conversation_id": 102,
            "created_at": "2025-01-02T12:00:00Z"
        }),
    )
    .await;

    let store = MemoryStore::new(Arc::new(HttpBackend::new(server.uri())));
    store.list().await;

    assert_eq!(store.delete(1, &false).await, MutationOutcome::Cancelled);
    assert_eq!(request_paths(&server).await, vec!["GET /api/memory"]);

    assert_eq!(store.delete(1, &true).await, MutationOutcome::Applied);
    assert!(store.begin_edit(2));
    store.set_draft("Edited");
    assert_eq!(store.save_edit().await, MutationOutcome::Applied);

    let state = store.snapshot();
    assert!(state.editing.is_none());
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.records[0].content, "Edited");
    assert_eq!(
        request_paths(&server).await,
        vec!["GET /api/memory", "DELETE /api/memory/1", "PUT /api/memory/2"]
    );
}

#[tokio::test]
async fn test_failed_update_keeps_edit_open() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/api/memory", mock_memories()).await;
    Mock::given(method("PUT"))
        .and(path("/api/memory/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = MemoryStore::new(Arc::new(HttpBackend::new(server.uri())));
    store.list().await;
    store.begin_edit(1);
    store.set_draft("Updated content");

    assert_eq!(store.save_edit().await, MutationOutcome::Failed);
    let state = store.snapshot();
    assert_eq!(
        state.editing.map(|draft| draft.content).as_deref(),
        Some("Updated content")
    );
    assert_eq!(state.records[0].content, "First memory");
}
