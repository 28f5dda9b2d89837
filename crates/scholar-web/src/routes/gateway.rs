//! AG-UI gateway endpoints

use crate::gateway::{relay_response, HttpAgent};
use crate::state::AppState;
use crate::WebError;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

pub fn gateway_routes() -> Router<AppState> {
    Router::new()
        .route("/api/copilotkit", post(forward_default))
        .route("/api/copilotkit/info", get(agent_info))
        .route("/api/copilotkit/agent/{name}/run", post(forward_named))
}

/// Relay a request to the default agent
async fn forward_default(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, WebError> {
    relay(&state, state.runtime.default_agent(), method, &headers, body).await
}

/// Relay a request to the agent named in the path
async fn forward_named(
    State(state): State<AppState>,
    Path(name): Path<String>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, WebError> {
    let agent = state
        .runtime
        .agent(&name)
        .ok_or_else(|| WebError::AgentNotFound(name.clone()))?;

    relay(&state, agent, method, &headers, body).await
}

async fn relay(
    state: &AppState,
    agent: &HttpAgent,
    method: Method,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, WebError> {
    let upstream = agent
        .forward(&state.http_client, method, headers, body)
        .await?;
    Ok(relay_response(upstream))
}

#[derive(Debug, Serialize)]
struct AgentInfo {
    name: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct RuntimeInfo {
    agents: Vec<AgentInfo>,
}

/// Agent discovery for the widget
async fn agent_info(State(state): State<AppState>) -> Json<RuntimeInfo> {
    let agents = state
        .runtime
        .agents()
        .map(|agent| AgentInfo {
            name: agent.name().to_string(),
            description: agent.description().to_string(),
        })
        .collect();

    Json(RuntimeInfo { agents })
}
