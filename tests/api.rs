//! REST surface tests driven through the router without a socket.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use colabri_relay::{build_app, config::Config, relay::Relay};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Router, Arc<Relay>) {
    let config = Config::default();
    let relay = Arc::new(Relay::from_config(&config));
    (build_app(&config, relay.clone()), relay)
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_and_ready() {
    let (app, _) = app();
    let (status, body) = call(app.clone(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = call(app, get("/api/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["defaultDocument"], "default");
    assert_eq!(body["documents"], 1);
}

#[tokio::test]
async fn test_list_starts_with_default_document() {
    let (app, _) = app();
    let (status, body) = call(app, get("/api/documents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": "default", "userCount": 0}]));
}

#[tokio::test]
async fn test_create_document_is_an_ensure() {
    let (app, relay) = app();

    let (status, body) = call(
        app.clone(),
        post_json("/api/documents", json!({"id": "plan", "content": "v1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "plan");

    let (_, body) = call(
        app.clone(),
        post_json("/api/documents", json!({"id": "plan", "content": "v2"})),
    )
    .await;
    assert_eq!(body["id"], "plan");
    assert_eq!(relay.snapshot("plan").await.unwrap().content, "v1");

    let (_, body) = call(app.clone(), post_json("/api/documents", json!({}))).await;
    let generated = body["id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&generated).is_ok());
    assert_eq!(
        relay.snapshot(&generated).await.unwrap().content,
        "// New Document\n\n"
    );

    let (_, body) = call(app, get("/api/documents")).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_empty_document_id_gets_generated() {
    let (app, relay) = app();
    let (status, body) = call(app, post_json("/api/documents", json!({"id": "", "content": "x"}))).await;
    assert_eq!(status, StatusCode::OK);
    let generated = body["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
    assert_eq!(relay.snapshot(generated).await.unwrap().content, "x");
    assert!(relay.snapshot("").await.is_none());
    assert_eq!(relay.list_documents().await.len(), 2);
}

#[tokio::test]
async fn test_diagnostics_counts_documents() {
    let (app, relay) = app();
    relay.create_document("extra", None).await;
    let (status, body) = call(app, get("/api/diagnostics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nDocs"], 2);
    assert_eq!(body["nConn"], 0);
}
