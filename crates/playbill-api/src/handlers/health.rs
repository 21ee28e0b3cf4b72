//! Health check handler.

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/health
///
/// Reports process liveness and store reachability. Always 200; a
/// degraded store shows up in the body rather than the status code.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = state.store.health_check().await.is_ok();
    let status = if database { "ok" } else { "degraded" };

    Json(serde_json::json!({
        "status": status,
        "database": database,
    }))
}
