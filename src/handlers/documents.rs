use std::sync::Arc;
use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use uuid::Uuid;

use crate::models::{CreateDocumentRequest, CreateDocumentResponse, DocumentSummary};
use crate::relay::Relay;

/// List every known document with its current member count
pub async fn list_documents(State(relay): State<Arc<Relay>>) -> Json<Vec<DocumentSummary>> {
    Json(relay.list_documents().await)
}

/// Create a document, or leave an existing one untouched
pub async fn create_document(
    State(relay): State<Arc<Relay>>,
    Json(request): Json<CreateDocumentRequest>,
) -> (StatusCode, Json<CreateDocumentResponse>) {
    // A missing or empty id gets a fresh one
    let doc_id = request
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // An empty content string falls back to the new-document seed
    let content = request.content.as_deref().filter(|c| !c.is_empty());
    if relay.create_document(&doc_id, content).await {
        info!("Document '{}' created via API", doc_id);
    }

    (StatusCode::OK, Json(CreateDocumentResponse { id: doc_id }))
}
