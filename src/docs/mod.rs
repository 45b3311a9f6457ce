use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/api/ready",
    responses(
        (status = 200, description = "Service readiness", body = ReadyResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

/// List documents
#[utoipa::path(
    get,
    path = "/api/documents",
    responses(
        (status = 200, description = "Known documents and their member counts", body = [DocumentSummary])
    )
)]
#[allow(dead_code)]
pub async fn list_documents_doc() {}

/// Create or ensure a document
#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = CreateDocumentRequest,
    responses(
        (status = 200, description = "Document exists", body = CreateDocumentResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_document_doc() {}

/// Relay diagnostics
#[utoipa::path(
    get,
    path = "/api/diagnostics",
    responses(
        (status = 200, description = "Relay and process statistics", body = DiagnosticsResponse)
    )
)]
#[allow(dead_code)]
pub async fn diagnostics_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        ready_check_doc,
        list_documents_doc,
        create_document_doc,
        diagnostics_doc,
    ),
    components(
        schemas(
            HealthResponse,
            ReadyResponse,
            DocumentSummary,
            CreateDocumentRequest,
            CreateDocumentResponse,
            DiagnosticsResponse,
            User,
        )
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
