//! Handler-level tests against in-process fake collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use feedlens_core::types::Document;
use feedlens_core::{ChatRelay, DocumentSink, RelayReply, Result};
use feedlens_server::{AppState, handler};
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// Relay that echoes the message back.
struct EchoRelay;

#[async_trait]
impl ChatRelay for EchoRelay {
    async fn send(&self, message: &str) -> Result<RelayReply> {
        Ok(RelayReply::new(
            format!("echo: {message}"),
            json!({"outputs": []}),
        ))
    }
}

/// Relay that always fails the way a dead endpoint would.
struct FailingRelay;

#[async_trait]
impl ChatRelay for FailingRelay {
    async fn send(&self, _message: &str) -> Result<RelayReply> {
        Err(feedlens_core::Error::remote_call("connection failed"))
    }
}

/// Sink that records everything it is handed.
#[derive(Default)]
struct RecordingSink {
    inserted: Mutex<Vec<(String, Vec<Document>)>>,
}

#[async_trait]
impl DocumentSink for RecordingSink {
    async fn insert_many(&self, collection: &str, documents: &[Document]) -> Result<usize> {
        let mut inserted = self.inserted.lock().await;
        inserted.push((collection.to_owned(), documents.to_vec()));
        Ok(documents.len())
    }
}

fn server(state: AppState) -> TestServer {
    TestServer::new(handler::routes(state)).unwrap()
}

fn csv_form(content: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(content.as_bytes().to_vec())
            .file_name("upload.csv")
            .mime_type("text/csv"),
    )
}

#[tokio::test]
async fn test_health() {
    let server = server(AppState::new());

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_chat_without_configuration_is_a_validation_error() {
    let server = server(AppState::new());

    let response = server.post("/api/chat").json(&json!({"message": "hi"})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"]["kind"], "validation");
}

#[tokio::test]
async fn test_chat_round_trip_and_explicit_clear() {
    let state = AppState::new().with_relay(Arc::new(EchoRelay));
    let server = server(state);

    let response = server
        .post("/api/chat")
        .json(&json!({"message": "hello"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["reply"], "echo: hello");
    assert!(body.get("raw").is_none());
    let session_id = body["sessionId"].as_str().unwrap().to_owned();

    // A second turn in the same session.
    let response = server
        .post("/api/chat")
        .json(&json!({"sessionId": session_id, "message": "again", "includeRaw": true}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["sessionId"], session_id.as_str());
    assert!(body.get("raw").is_some());

    let response = server
        .get(&format!("/api/chat/{session_id}/messages"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[1]["role"], "assistant");

    // Clearing is explicit and final.
    let response = server
        .delete(&format!("/api/chat/{session_id}/messages"))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/api/chat/{session_id}/messages"))
        .await;
    let body: Value = response.json();
    assert!(body["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_relay_failure_keeps_the_user_turn() {
    let state = AppState::new().with_relay(Arc::new(FailingRelay));
    let server = server(state.clone());

    let session_id = uuid::Uuid::now_v7();
    let response = server
        .post("/api/chat")
        .json(&json!({"sessionId": session_id, "message": "hello"}))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["error"]["kind"], "remote_call");

    let messages = state.sessions().messages(session_id).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "hello");
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    let state = AppState::new().with_relay(Arc::new(EchoRelay));
    let server = server(state);

    let response = server.post("/api/chat").json(&json!({"message": ""})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_preview_reports_table_statistics() {
    let server = server(AppState::new());

    let csv = "description,likes,city\nfirst,10,NYC\nsecond,20,\n";
    let response = server
        .post("/api/datasets/preview")
        .multipart(csv_form(csv))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["rows"], 2);
    assert_eq!(body["columns"], 3);
    assert_eq!(body["numericColumns"], json!(["likes"]));
    assert_eq!(body["missingValues"]["city"], 1);
}

#[tokio::test]
async fn test_preview_rejects_malformed_csv() {
    let server = server(AppState::new());

    let response = server
        .post("/api/datasets/preview")
        .multipart(csv_form("a,b\n1,2,3\n"))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["kind"], "parse");
}

#[tokio::test]
async fn test_ingest_transforms_and_inserts() {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new()
        .with_sink(sink.clone())
        .with_default_collection("posts");
    let server = server(state);

    let csv = "description,id\n42 years old at 10:00:00.000000,1\n";
    let response = server
        .post("/api/datasets/ingest")
        .multipart(csv_form(csv))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["collection"], "posts");
    assert_eq!(body["documents"], 1);
    assert_eq!(body["inserted"], 1);

    let inserted = sink.inserted.lock().await;
    let (collection, documents) = &inserted[0];
    assert_eq!(collection, "posts");
    assert_eq!(documents[0].vectorize, "Middle-aged people at morning");
    assert_eq!(documents[0].metadata.get("id"), Some(&json!("1")));
}

#[tokio::test]
async fn test_ingest_collection_override() {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new()
        .with_sink(sink.clone())
        .with_default_collection("posts");
    let server = server(state);

    let response = server
        .post("/api/datasets/ingest")
        .add_query_param("collection", "archive")
        .multipart(csv_form("description\nhello\n"))
        .await;

    response.assert_status_ok();
    let inserted = sink.inserted.lock().await;
    assert_eq!(inserted[0].0, "archive");
}

#[tokio::test]
async fn test_ingest_without_sink_is_a_validation_error() {
    let server = server(AppState::new());

    let response = server
        .post("/api/datasets/ingest")
        .multipart(csv_form("description\nhello\n"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"]["kind"], "validation");
}

#[tokio::test]
async fn test_ingest_without_collection_is_a_validation_error() {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new().with_sink(sink);
    let server = server(state);

    let response = server
        .post("/api/datasets/ingest")
        .multipart(csv_form("description\nhello\n"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_ingest_missing_description_column() {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new()
        .with_sink(sink.clone())
        .with_default_collection("posts");
    let server = server(state);

    let response = server
        .post("/api/datasets/ingest")
        .multipart(csv_form("city,id\nNYC,1\n"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"]["kind"], "missing_column");

    // Fail fast: nothing reached the sink.
    assert!(sink.inserted.lock().await.is_empty());
}
