// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};

use crate::gateway::RuntimeGateway;
use crate::models::InventorySnapshot;
use crate::worker::SharedInventory;

pub use http::{NAME, VERSION};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) inventory_tx: broadcast::Sender<InventorySnapshot>,
    pub(crate) latest: SharedInventory,
    pub(crate) gateway: Arc<dyn RuntimeGateway>,
    pub(crate) ws_connections: Arc<AtomicUsize>,
}

pub fn app(
    inventory_tx: broadcast::Sender<InventorySnapshot>,
    latest: SharedInventory,
    gateway: Arc<dyn RuntimeGateway>,
    ws_connections: Arc<AtomicUsize>,
) -> Router {
    let state = AppState {
        inventory_tx,
        latest,
        gateway,
        ws_connections,
    };
    Router::new()
        .route("/", get(|| async { "dockdeck: container inventory" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/containers", get(http::containers_handler)) // GET /api/containers
        .route("/api/health", get(http::health_handler)) // GET /api/health
        .route("/ws/containers", get(ws::ws_containers)) // WS /ws/containers
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
