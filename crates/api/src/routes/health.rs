use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub fn health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/healthz", get(healthz))
}

/// Landing page — keeps free-tier hosts and uptime pingers happy.
async fn home(State(state): State<AppState>) -> Json<Value> {
    let scanner = *state.scanner_state.read().await;
    Json(json!({
        "service": "rangebot",
        "status": "online",
        "scanner": scanner.to_string(),
    }))
}

/// Health check endpoint — no auth required.
async fn healthz(State(state): State<AppState>) -> Json<Value> {
    let scanner = *state.scanner_state.read().await;
    Json(json!({
        "status": "ok",
        "scanner": scanner.to_string(),
    }))
}
