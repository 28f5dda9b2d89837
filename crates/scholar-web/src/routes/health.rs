//! Health check endpoints

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "scholar-web"
    }))
}

/// Ready once the agent binding exists; the agent itself is not contacted
async fn ready_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "agent": state.runtime.default_agent().name()
    }))
}
