use crate::{handlers, relay::Relay, websocket::handler::websocket_handler};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(relay: Arc<Relay>) -> Router {
    Router::<Arc<Relay>>::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::ready_check))
        .route("/diagnostics", get(handlers::diagnostics))
        .route("/documents", get(handlers::list_documents).post(handlers::create_document))
        .with_state(relay)
}

/// Create the WebSocket upgrade routes
pub fn create_ws_routes(relay: Arc<Relay>) -> Router {
    Router::<Arc<Relay>>::new()
        .route("/", get(websocket_handler))
        .route("/ws", get(websocket_handler))
        .with_state(relay)
}
