//! Gateway integration tests
//!
//! The agent is a wiremock server; the app is driven through the router
//! directly with `oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use scholar_config::{AgentBinding, WebConfig};
use scholar_web::{build_router, AgentRuntime, AppState};
use serde_json::Value;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;
use wiremock::matchers::{body_string, header as header_eq, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RUN_INPUT: &str = r#"{"threadId":"t-1","runId":"r-1","state":{},"messages":[{"id":"m-1","role":"user","content":"Summarize attention papers"}],"tools":[],"context":[],"forwardedProps":{}}"#;

const SSE_BODY: &str = "data: {\"type\":\"RUN_STARTED\",\"threadId\":\"t-1\",\"runId\":\"r-1\"}\n\n\
data: {\"type\":\"TEXT_MESSAGE_CONTENT\",\"messageId\":\"a-1\",\"delta\":\"Hello\"}\n\n\
data: {\"type\":\"RUN_FINISHED\",\"threadId\":\"t-1\",\"runId\":\"r-1\"}\n\n";

// ============================================================================
// Helpers
// ============================================================================

fn app_with_config(agent_url: &str, config: &WebConfig) -> Router {
    let runtime = AgentRuntime::new(AgentBinding::with_url(agent_url));
    let state = AppState::new(runtime).expect("state should build");
    build_router(state, config)
}

fn app(agent_url: &str) -> Router {
    app_with_config(agent_url, &WebConfig::default())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================================
// Pass-through
// ============================================================================

#[tokio::test]
async fn test_stream_passes_through_unchanged() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(SSE_BODY),
        )
        .expect(1)
        .mount(&agent)
        .await;

    let response = app(&agent.uri())
        .oneshot(post_json("/api/copilotkit", RUN_INPUT))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream"
    );
    assert_eq!(body_text(response).await, SSE_BODY);
}

#[tokio::test]
async fn test_agent_error_status_passes_through() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"detail":"invalid input"}"#))
        .mount(&agent)
        .await;

    let response = app(&agent.uri())
        .oneshot(post_json("/api/copilotkit", RUN_INPUT))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_text(response).await, r#"{"detail":"invalid input"}"#);
}

#[tokio::test]
async fn test_request_body_and_headers_are_forwarded() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string(RUN_INPUT))
        .and(header_eq("content-type", "application/json"))
        .and(header_eq("accept", "text/event-stream"))
        .and(header_eq("x-trace-id", "abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&agent)
        .await;

    let mut request = post_json("/api/copilotkit", RUN_INPUT);
    request
        .headers_mut()
        .insert("x-trace-id", "abc123".parse().unwrap());

    let response = app(&agent.uri()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_caller_accept_header_is_kept() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header_eq("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&agent)
        .await;

    let mut request = post_json("/api/copilotkit", RUN_INPUT);
    request
        .headers_mut()
        .insert(header::ACCEPT, "application/json".parse().unwrap());

    let response = app(&agent.uri()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_agent_url_path_is_normalized() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ag-ui/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&agent)
        .await;

    let url = format!("{}/ag-ui", agent.uri());
    let response = app(&url)
        .oneshot(post_json("/api/copilotkit", RUN_INPUT))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

const FIRST_EVENT: &str =
    "data: {\"type\":\"RUN_STARTED\",\"threadId\":\"t-1\",\"runId\":\"r-1\"}\n\n";
const LAST_EVENT: &str =
    "data: {\"type\":\"RUN_FINISHED\",\"threadId\":\"t-1\",\"runId\":\"r-1\"}\n\n";

/// Agent that sends one SSE event, then holds the response open until
/// `finish` fires before sending the rest
async fn spawn_held_agent(finish: oneshot::Receiver<()>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before request headers");
            request.extend_from_slice(&buf[..n]);
            if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
        let content_length: usize = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);
        while request.len() < header_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
        }

        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: text/event-stream\r\ntransfer-encoding: chunked\r\n\r\n",
            )
            .await
            .unwrap();
        let first = format!("{:x}\r\n{}\r\n", FIRST_EVENT.len(), FIRST_EVENT);
        socket.write_all(first.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();

        let _ = finish.await;

        let last = format!("{:x}\r\n{}\r\n0\r\n\r\n", LAST_EVENT.len(), LAST_EVENT);
        socket.write_all(last.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_first_event_arrives_before_agent_finishes() {
    let (finish_tx, finish_rx) = oneshot::channel();
    let agent_url = spawn_held_agent(finish_rx).await;

    let response = app(&agent_url)
        .oneshot(post_json("/api/copilotkit", RUN_INPUT))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mut body = response.into_body();
    let mut received = Vec::new();
    while !received.ends_with(b"\n\n") {
        let frame = tokio::time::timeout(Duration::from_secs(5), body.frame())
            .await
            .expect("first event was held back until the agent finished")
            .expect("stream ended early")
            .unwrap();
        if let Ok(data) = frame.into_data() {
            received.extend_from_slice(&data);
        }
    }
    assert_eq!(String::from_utf8(received).unwrap(), FIRST_EVENT);

    finish_tx.send(()).unwrap();

    let rest = body.collect().await.unwrap().to_bytes();
    assert_eq!(String::from_utf8(rest.to_vec()).unwrap(), LAST_EVENT);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_unreachable_agent_is_bad_gateway() {
    // Nothing listens on port 1
    let response = app("http://127.0.0.1:1/")
        .oneshot(post_json("/api/copilotkit", RUN_INPUT))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"]["code"], "agent_unreachable");
}

#[tokio::test]
async fn test_malformed_payload_does_not_break_later_requests() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string("{not json"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad payload"))
        .mount(&agent)
        .await;
    Mock::given(method("POST"))
        .and(body_string(RUN_INPUT))
        .respond_with(ResponseTemplate::new(200).set_body_string(SSE_BODY))
        .mount(&agent)
        .await;

    let router = app(&agent.uri());

    let bad = router
        .clone()
        .oneshot(post_json("/api/copilotkit", "{not json"))
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(bad).await, "bad payload");

    let good = router
        .oneshot(post_json("/api/copilotkit", RUN_INPUT))
        .await
        .unwrap();
    assert_eq!(good.status(), StatusCode::OK);
    assert_eq!(body_text(good).await, SSE_BODY);
}

#[tokio::test]
async fn test_oversized_body_is_refused_without_forwarding() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&agent)
        .await;

    let config = WebConfig {
        max_body_bytes: 16,
        ..WebConfig::default()
    };
    let response = app_with_config(&agent.uri(), &config)
        .oneshot(post_json("/api/copilotkit", RUN_INPUT))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_get_is_not_forwarded() {
    let agent = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&agent)
        .await;

    let request = Request::builder()
        .uri("/api/copilotkit")
        .body(Body::empty())
        .unwrap();
    let response = app(&agent.uri()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// Named agents and discovery
// ============================================================================

#[tokio::test]
async fn test_named_agent_route_forwards() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SSE_BODY))
        .expect(1)
        .mount(&agent)
        .await;

    let response = app(&agent.uri())
        .oneshot(post_json(
            "/api/copilotkit/agent/academic_research/run",
            RUN_INPUT,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, SSE_BODY);
}

#[tokio::test]
async fn test_unknown_agent_is_not_found() {
    let agent = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&agent)
        .await;

    let response = app(&agent.uri())
        .oneshot(post_json("/api/copilotkit/agent/poetry/run", RUN_INPUT))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["error"]["code"], "agent_not_found");
}

#[tokio::test]
async fn test_info_lists_the_bound_agent() {
    let request = Request::builder()
        .uri("/api/copilotkit/info")
        .body(Body::empty())
        .unwrap();
    let response = app("http://127.0.0.1:1/").oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    let agents = body["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0]["name"], "academic_research");
}
