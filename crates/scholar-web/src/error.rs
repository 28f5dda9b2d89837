use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown agent: {0}")]
    AgentNotFound(String),

    #[error("Agent request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            WebError::AgentNotFound(_) => StatusCode::NOT_FOUND,
            WebError::Upstream(_) => StatusCode::BAD_GATEWAY,
            WebError::Config(_) | WebError::Io(_) | WebError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            WebError::Config(_) => "config_error",
            WebError::Io(_) => "io_error",
            WebError::AgentNotFound(_) => "agent_not_found",
            WebError::Upstream(_) => "agent_unreachable",
            WebError::Template(_) => "template_error",
        }
    }
}

impl From<scholar_config::ConfigError> for WebError {
    fn from(e: scholar_config::ConfigError) -> Self {
        WebError::Config(e.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(code = self.code(), "{}", self);
        }
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
