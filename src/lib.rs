pub mod config;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod relay;
pub mod routes;
pub mod websocket;

use std::sync::Arc;
use axum::{http::HeaderValue, Router};
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;
use docs::ApiDoc;
use relay::Relay;
use routes::{create_api_routes, create_ws_routes};

/// Build the full application router around a shared relay.
pub fn build_app(config: &Config, relay: Arc<Relay>) -> Router {
    Router::new()
        // Mount API routes
        .nest("/api", create_api_routes(relay.clone()))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config))
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
        // WebSocket upgrades sit outside the HTTP layers
        .merge(create_ws_routes(relay))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config.cors_origin_list() {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!("Ignoring invalid CORS origin '{}': {}", o, e);
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}
