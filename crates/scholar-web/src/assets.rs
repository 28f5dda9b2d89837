//! Static asset serving for the chat widget
//!
//! - Release builds: assets embedded via rust-embed
//! - Debug builds: served from filesystem
//! - `static_dir` in config overrides both

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get_service,
    Router,
};
use rust_embed::Embed;
use tower_http::services::ServeDir;

/// Embedded assets for release builds
#[derive(Embed)]
#[folder = "web/dist"]
struct Assets;

/// Create router for serving static assets
pub fn static_routes(web_dir: Option<&str>) -> Router {
    if let Some(dir) = web_dir {
        tracing::info!("Serving static assets from: {}", dir);
        serve_from_dir(dir)
    } else if cfg!(debug_assertions) {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/web/dist");
        tracing::debug!("Debug mode: serving static assets from: {}", dir);
        serve_from_dir(dir)
    } else {
        tracing::debug!("Release mode: serving embedded static assets");
        serve_embedded()
    }
}

fn serve_from_dir(dir: &str) -> Router {
    Router::new().fallback_service(
        get_service(ServeDir::new(dir))
            .handle_error(|_| async { StatusCode::INTERNAL_SERVER_ERROR }),
    )
}

fn serve_embedded() -> Router {
    Router::new().fallback(embedded_handler)
}

async fn embedded_handler(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    match <Assets as Embed>::get(path) {
        Some(content) => respond_with_asset(path, content.data.to_vec()),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

fn respond_with_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    ([(header::CONTENT_TYPE, mime)], data).into_response()
}
