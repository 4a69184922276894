use axum::{extract::State, http::StatusCode, middleware, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tracing::warn;

use common::ScanCommand;

use crate::{auth::require_auth, AppState};

pub fn scan_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/scan", post(trigger_scan))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

/// Run exactly one scan cycle synchronously and report how many signals
/// were dispatched.
async fn trigger_scan(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (reply, rx) = oneshot::channel();
    let command = ScanCommand::Trigger { reply };

    if state.command_tx.send(command).await.is_err() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "error", "message": "scanner is not running"})),
        );
    }

    match rx.await {
        Ok(Ok(count)) => (
            StatusCode::OK,
            Json(json!({"status": "success", "signals_found": count})),
        ),
        Ok(Err(e)) => {
            warn!(error = %e, "Manual scan failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "error", "message": e.to_string()})),
            )
        }
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"status": "error", "message": "scanner dropped the request"})),
        ),
    }
}
