// GET handlers: version, api/containers, api/health

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/containers: latest inventory; 503 until the first cycle has succeeded.
pub(super) async fn containers_handler(State(state): State<AppState>) -> Response {
    match state.latest.read().await.as_ref() {
        Some(snapshot) => Json(snapshot.clone()).into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": "inventory not collected yet" })),
        )
            .into_response(),
    }
}

/// GET /api/health: pings the runtime.
pub(super) async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.gateway.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))),
        Err(e) => {
            tracing::warn!(error = %e, operation = "ping", "runtime health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "error": e.to_string(),
                })),
            )
        }
    }
}
