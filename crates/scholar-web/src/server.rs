use crate::assets::static_routes;
use crate::gateway::AgentRuntime;
use crate::routes::{gateway_routes, health_routes, page_routes};
use crate::state::AppState;
use crate::{Result, WebError};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use scholar_config::WebConfig;

fn cors_layer(config: &WebConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

/// Assemble the application: gateway, pages, health and static assets
pub fn build_router(state: AppState, config: &WebConfig) -> Router {
    Router::new()
        .merge(gateway_routes())
        .merge(page_routes())
        .merge(health_routes())
        .with_state(state)
        .merge(static_routes(config.static_dir.as_deref()))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(config: &WebConfig, runtime: AgentRuntime) -> Result<()> {
    let agent_url = runtime.default_agent().url().to_string();
    let state = AppState::new(runtime)?;
    let app = build_router(state, config);

    let addrs = config.socket_addrs()?;

    let listener = tokio::net::TcpListener::bind(&addrs[..])
        .await
        .map_err(WebError::Io)?;

    tracing::info!("Starting web server on http://{}", listener.local_addr()?);
    tracing::info!("Forwarding agent requests to {}", agent_url);

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
