mod auth;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::sync::{mpsc, RwLock};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use common::{ScanCommand, ScannerState};

/// Shared application state injected into every route handler.
#[derive(Clone)]
pub struct AppState {
    pub scanner_state: Arc<RwLock<ScannerState>>,
    pub command_tx: mpsc::Sender<ScanCommand>,
    pub api_token: String,
}

/// Assemble the router. Separated from `serve` so tests can drive it
/// without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_router())
        .merge(routes::scan_router(state.clone()))
        .with_state(state)
}

/// Build and run the Axum API server.
pub async fn serve(state: AppState, port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    let app = router(state).layer(cors);

    info!(%addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
