//! Forwarding of AG-UI requests to the remote agent
//!
//! The gateway is a pass-through: request bodies are not inspected, and the
//! agent's status, headers and (possibly streamed) body go back to the
//! caller as they arrive. There is no retry, backoff or local timeout.

use crate::{Result, WebError};
use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method};
use axum::response::Response;
use scholar_config::AgentBinding;

/// Headers that describe a single connection and must not be relayed
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// What an AG-UI HTTP client asks for when the caller didn't say
const DEFAULT_ACCEPT: &str = "text/event-stream";

fn is_forwardable(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(&name.as_str())
        && *name != header::HOST
        && *name != header::CONTENT_LENGTH
}

fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_forwardable(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// A remote agent reachable over AG-UI/HTTP
#[derive(Debug, Clone)]
pub struct HttpAgent {
    binding: AgentBinding,
}

impl HttpAgent {
    pub fn new(binding: AgentBinding) -> Self {
        Self { binding }
    }

    pub fn name(&self) -> &str {
        &self.binding.name
    }

    pub fn url(&self) -> &str {
        &self.binding.url
    }

    pub fn description(&self) -> &str {
        &self.binding.description
    }

    /// Send one request to the agent and hand back its raw response
    ///
    /// Transport failures (refused connection, DNS, reset) become
    /// [`WebError::Upstream`]. HTTP error statuses are not errors here; they
    /// are relayed like any other response.
    pub async fn forward(
        &self,
        client: &reqwest::Client,
        method: Method,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<reqwest::Response> {
        let mut outbound = forwardable_headers(headers);
        if !outbound.contains_key(header::ACCEPT) {
            outbound.insert(header::ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        }

        tracing::debug!(agent = %self.name(), url = %self.url(), bytes = body.len(), "Forwarding to agent");

        client
            .request(method, self.url())
            .headers(outbound)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(agent = %self.name(), url = %self.url(), "Agent request failed: {}", e);
                WebError::Upstream(e)
            })
    }
}

/// Turn the agent's response into ours without buffering the body
pub fn relay_response(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// The agents this frontend can address
///
/// Built once at startup from the process's single [`AgentBinding`] and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AgentRuntime {
    agent: HttpAgent,
}

impl AgentRuntime {
    pub fn new(binding: AgentBinding) -> Self {
        Self {
            agent: HttpAgent::new(binding),
        }
    }

    /// The agent requests go to when none is named
    pub fn default_agent(&self) -> &HttpAgent {
        &self.agent
    }

    /// Look an agent up by its logical name
    pub fn agent(&self, name: &str) -> Option<&HttpAgent> {
        (self.agent.name() == name).then_some(&self.agent)
    }

    pub fn agents(&self) -> impl Iterator<Item = &HttpAgent> {
        std::iter::once(&self.agent)
    }
}

/// HTTP client used for all forwards
///
/// No request timeout: an agent run streams until the agent ends it.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| WebError::Config(format!("Failed to create HTTP client: {e}")))
}
