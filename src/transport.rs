//! Stateless HTTP transport for the gateway.
//!
//! Every `POST /mcp` request follows the same path: extract the tenant token
//! from the headers (fail closed with 401), build a fresh request-scoped
//! [`AsanaServer`] bound to that token, and hand the JSON-RPC body to it.
//! Nothing survives the request: the MCP service runs over an in-memory
//! duplex inside the request's scope and is aborted when the request future
//! drops, which also cancels any in-flight upstream call.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get, post};
use axum::{Json, Router};
use rmcp::ServiceExt;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::task::JoinHandle;

use crate::auth::{self, TOKEN_HEADER};
use crate::config::GatewayConfig;
use crate::server::AsanaServer;

/// Name the gateway reports in health and capability payloads.
pub const SERVER_NAME: &str = "asana-gateway";

/// Request id used for the synthesized initialize handshake.
const HANDSHAKE_ID: &str = "asana-gateway-handshake";

/// Build the gateway router.
pub fn router(config: GatewayConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mcp", post(mcp_post))
        .route("/sse", any(sse_unsupported))
        .fallback(capabilities)
        .with_state(config)
}

/// `GET /health`: static status, bypasses auth.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "server": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `/sse`: the legacy streaming transport needs session affinity this
/// stateless deployment does not provide.
async fn sse_unsupported() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "error": "SSE transport not supported",
            "message": "The SSE transport requires session affinity. Use POST /mcp with \
                        per-request authentication instead.",
        })),
    )
}

/// Any unrecognized path: capability document with the full tool catalog.
async fn capabilities() -> Json<Value> {
    Json(json!({
        "name": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "revision": concat!(env!("BUILD_GIT_SHA"), env!("BUILD_GIT_DIRTY")),
        "built": env!("BUILD_TIMESTAMP"),
        "description": "Multi-tenant MCP gateway for the Asana API",
        "endpoints": {
            "health": {"method": "GET", "path": "/health"},
            "mcp": {
                "method": "POST",
                "path": "/mcp",
                "required_headers": [TOKEN_HEADER],
            },
            "sse": {"path": "/sse", "status": "unsupported"},
        },
        "tools": AsanaServer::tool_catalog(),
    }))
}

/// `POST /mcp`: credential extraction, per-request server construction, and
/// JSON-RPC dispatch.
async fn mcp_post(
    State(config): State<GatewayConfig>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let credentials = match auth::extract_credentials(&headers) {
        Ok(credentials) => credentials,
        Err(error) => {
            tracing::warn!("rejected /mcp request without credentials");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Unauthorized",
                    "message": error.to_string(),
                    "required_headers": [TOKEN_HEADER],
                })),
            )
                .into_response();
        }
    };

    let message: Value = match serde_json::from_str(&body) {
        Ok(message @ Value::Object(_)) => message,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {"code": -32700, "message": "request body is not a JSON-RPC message"},
                })),
            )
                .into_response();
        }
    };

    // Notifications and stray client responses have nothing to route to in a
    // stateless deployment; acknowledge without dispatching.
    if message.get("id").is_none() || message.get("method").is_none() {
        return StatusCode::ACCEPTED.into_response();
    }

    let server = match AsanaServer::new(credentials.token(), &config) {
        Ok(server) => server,
        Err(error) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Unauthorized",
                    "message": error.to_string(),
                    "required_headers": [TOKEN_HEADER],
                })),
            )
                .into_response();
        }
    };

    let method = message
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    tracing::debug!(method = %method, "dispatching MCP request");

    match dispatch(server, message).await {
        Ok(response) => Json(response).into_response(),
        Err(error) => {
            tracing::error!(method = %method, error = %error, "MCP dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {"code": -32603, "message": "internal error"},
                })),
            )
                .into_response()
        }
    }
}

/// Aborts the wrapped task when dropped, so cancelling the inbound request
/// also cancels the request-scoped MCP service and its upstream call.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Debug, Error)]
enum DispatchError {
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("transport I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("MCP service closed before responding")]
    Closed,
}

/// Serve the request-scoped server over an in-memory duplex and exchange a
/// single JSON-RPC message with it.
///
/// Bare requests get a synthesized initialize handshake first, mirroring how
/// a stateless deployment treats every message as its own session. The
/// service task is guarded by [`AbortOnDrop`].
async fn dispatch(server: AsanaServer, message: Value) -> Result<Value, DispatchError> {
    let (client_io, server_io) = tokio::io::duplex(64 * 1024);

    let service = tokio::spawn(async move {
        let (read, write) = tokio::io::split(server_io);
        match server.serve((read, write)).await {
            Ok(running) => {
                let _ = running.waiting().await;
            }
            Err(error) => {
                tracing::debug!(error = %error, "request-scoped MCP service ended early");
            }
        }
    });
    let _guard = AbortOnDrop(service);

    let (read, mut write) = tokio::io::split(client_io);
    let mut lines = BufReader::new(read).lines();

    let is_initialize = message.get("method").and_then(Value::as_str) == Some("initialize");
    if !is_initialize {
        let handshake = json!({
            "jsonrpc": "2.0",
            "id": HANDSHAKE_ID,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION")},
            },
        });
        send(&mut write, &handshake).await?;
        recv_matching(&mut lines, &json!(HANDSHAKE_ID)).await?;
        send(
            &mut write,
            &json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        )
        .await?;
    }

    let id = message.get("id").cloned().unwrap_or(Value::Null);
    send(&mut write, &message).await?;
    recv_matching(&mut lines, &id).await
}

async fn send<W>(write: &mut W, message: &Value) -> Result<(), DispatchError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    write.write_all(line.as_bytes()).await?;
    write.flush().await?;
    Ok(())
}

/// Read newline-delimited JSON messages until one matches the wanted id.
/// Server-initiated notifications are dropped; a closed stream means the
/// service died before answering.
async fn recv_matching<R>(
    lines: &mut Lines<BufReader<R>>,
    id: &Value,
) -> Result<Value, DispatchError>
where
    R: AsyncRead + Unpin,
{
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let message: Value = match serde_json::from_str(&line) {
            Ok(message) => message,
            Err(_) => continue,
        };
        if message.get("id") == Some(id) {
            return Ok(message);
        }
    }
    Err(DispatchError::Closed)
}

// ============================================================================
// Stateful session mode (always refused)
// ============================================================================

/// Marker for the session-oriented serving mode.
///
/// A persistent MCP session needs credentials that outlive a single request,
/// which the per-request tenant model cannot provide, so initialization
/// always fails.
#[derive(Debug)]
pub struct StatefulSession {
    _private: (),
}

/// Stateful session mode cannot be enabled in this deployment.
#[derive(Debug, Error)]
#[error(
    "stateful session mode is disabled: tenant credentials are scoped to a single \
     request and cannot back a persistent session"
)]
pub struct SessionModeError;

impl StatefulSession {
    /// Refuses to initialize a stateful session.
    pub fn initialize(_config: &GatewayConfig) -> Result<Self, SessionModeError> {
        Err(SessionModeError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt as _;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn response_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn mcp_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json")
            .header("x-asana-access-token", "secret-token")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_bypasses_auth() {
        let app = router(GatewayConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["server"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_mcp_without_token_is_401_with_required_headers() {
        let app = router(GatewayConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mcp")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response_json(response).await;
        assert_eq!(body["error"], "Unauthorized");
        assert_eq!(body["required_headers"][0], "X-Asana-Access-Token");
    }

    #[tokio::test]
    async fn test_sse_is_501_for_any_method() {
        for http_method in ["GET", "POST"] {
            let app = router(GatewayConfig::default());
            let response = app
                .oneshot(
                    Request::builder()
                        .method(http_method)
                        .uri("/sse")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        }
    }

    #[tokio::test]
    async fn test_unknown_path_returns_capability_document() {
        let app = router(GatewayConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["name"], SERVER_NAME);
        assert_eq!(
            body["endpoints"]["mcp"]["required_headers"][0],
            "X-Asana-Access-Token"
        );

        let tools: Vec<&str> = body["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(tools.contains(&"asana_create_task"));
        assert!(tools.contains(&"asana_list_workspaces"));
        assert!(tools.contains(&"asana_create_webhook"));
    }

    #[tokio::test]
    async fn test_notification_is_acknowledged_without_dispatch() {
        let app = router(GatewayConfig::default());

        let response = app
            .oneshot(mcp_request(&json!({
                "jsonrpc": "2.0",
                "method": "notifications/initialized",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn test_unparsable_body_is_a_parse_error() {
        let app = router(GatewayConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mcp")
                    .header("content-type", "application/json")
                    .header("x-asana-access-token", "secret-token")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_initialize_round_trip() {
        let app = router(GatewayConfig::default());

        let response = app
            .oneshot(mcp_request(&json!({
                "jsonrpc": "2.0",
                "id": 0,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "test-client", "version": "0.0.0"},
                },
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["id"], 0);
        assert_eq!(body["result"]["serverInfo"]["name"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_tools_list_includes_catalog() {
        let app = router(GatewayConfig::default());

        let response = app
            .oneshot(mcp_request(&json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "tools/list",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["id"], 7);

        let names: Vec<&str> = body["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|tool| tool["name"].as_str())
            .collect();
        assert!(names.contains(&"asana_get_task"));
        assert!(names.contains(&"asana_search_tasks"));
    }

    #[tokio::test]
    async fn test_create_task_end_to_end() {
        let upstream = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(header("authorization", "Bearer secret-token"))
            .and(body_json(json!({
                "data": {"name": "Ship spec", "workspace": "999"}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"gid": "1", "name": "Ship spec", "resource_type": "task"}
            })))
            .mount(&upstream)
            .await;

        let config = GatewayConfig {
            base_url: upstream.uri(),
            ..GatewayConfig::default()
        };
        let app = router(config);

        let response = app
            .oneshot(mcp_request(&json!({
                "jsonrpc": "2.0",
                "id": 42,
                "method": "tools/call",
                "params": {
                    "name": "asana_create_task",
                    "arguments": {"name": "Ship spec", "workspace": "999"},
                },
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["id"], 42);

        let text = body["result"]["content"][0]["text"].as_str().unwrap();
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["success"], true);
        assert_eq!(payload["message"], "Task created");
        assert_eq!(payload["task"]["gid"], "1");
    }

    #[tokio::test]
    async fn test_upstream_404_surfaces_as_tool_error_envelope() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tasks/999"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"message": "task: Unknown object: 999"}]
            })))
            .mount(&upstream)
            .await;

        let config = GatewayConfig {
            base_url: upstream.uri(),
            ..GatewayConfig::default()
        };
        let app = router(config);

        let response = app
            .oneshot(mcp_request(&json!({
                "jsonrpc": "2.0",
                "id": 9,
                "method": "tools/call",
                "params": {
                    "name": "asana_get_task",
                    "arguments": {"gid": "999"},
                },
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["result"]["isError"], true);

        let text = body["result"]["content"][0]["text"].as_str().unwrap();
        let envelope: Value = serde_json::from_str(text).unwrap();
        assert_eq!(envelope["details"]["kind"], "not_found");
        assert_eq!(envelope["details"]["path"], "/tasks/999");
    }

    #[tokio::test]
    async fn test_stateful_session_always_refuses() {
        let result = StatefulSession::initialize(&GatewayConfig::default());
        let error = result.err().expect("session mode must be refused");
        assert!(error.to_string().contains("scoped to a single request"));
    }
}
