use std::sync::Arc;
use axum::{extract::State, Json};
use crate::models::{HealthResponse, ReadyResponse};
use crate::relay::Relay;
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Readiness check endpoint. Ready once the default document is in place.
pub async fn ready_check(State(relay): State<Arc<Relay>>) -> Json<ReadyResponse> {
    debug!("Readiness check requested");
    let default_document = relay.default_document_id().await;
    let status = if relay.snapshot(&default_document).await.is_some() {
        "ok"
    } else {
        "starting"
    };
    Json(ReadyResponse {
        status: status.to_string(),
        default_document,
        documents: relay.stats().await.documents,
    })
}
