//! Routing module for the coffee menu application

use crate::menu::SharedState;
use axum::{
    body::Body, extract::Request, middleware::Next, response::IntoResponse, routing::get, Json,
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        tracing::info!(%method, %uri, "request");

        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!(%method, %uri, status = %res.status(), "request failed");
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::menu::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Liveness probe; does not touch the store.
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
