//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests.
//! This allows standard HTTP clients (curl, browsers, etc.) to call the
//! Tiingo tools without an MCP stdio host.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::ToolError;

/// Protocol revision announced in `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Error response for a failed tool call, with the same code and data
    /// the rmcp transports report.
    pub fn tool_error(id: Option<serde_json::Value>, err: ToolError) -> Self {
        let code = err.json_rpc_code();
        let McpError { message, data, .. } = McpError::from(err);
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into_owned(),
                data,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Path of the JSON-RPC endpoint, echoed by the info route.
    rpc_path: String,
    /// Session state for maintaining conversation context.
    session: Arc<RwLock<Option<SessionState>>>,
}

/// Session state for a client.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
    protocol_version: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router serving `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let state = AppState {
            server,
            rpc_path: self.config.rpc_path.clone(),
            session: Arc::new(RwLock::new(None)),
        };

        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": format!("Send POST requests to {} with JSON-RPC messages", state.rpc_path)
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "tools": state.server.registry().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request).await,

        "tools/list" => handle_tools_list(state, request),

        "tools/call" => handle_tools_call(state, request).await,

        // Notifications (no response needed for stateless HTTP)
        method if method.starts_with("notifications/") => {
            handle_notification(state, &request).await;
            JsonRpcResponse::success(request.id, serde_json::json!(null))
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

/// Handle initialize request.
async fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let mut session = state.session.write().await;
    *session = Some(SessionState {
        initialized: false,
        protocol_version: PROTOCOL_VERSION.to_string(),
    });

    let result = serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": "MCP Server exposing Tiingo API endpoints as tools."
    });

    JsonRpcResponse::success(request.id, result)
}

/// Handle tools/list request.
fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let tools = state.server.list_tools();
    JsonRpcResponse::success(request.id, serde_json::json!({ "tools": tools }))
}

/// Handle tools/call request.
async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"),
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing tool name"),
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::Value::Null);

    match state.server.call_tool(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::tool_error(request.id, e),
    }
}

/// Handle notifications (no response needed).
async fn handle_notification(state: &AppState, request: &JsonRpcRequest) {
    match request.method.as_str() {
        "notifications/initialized" => {
            let mut session = state.session.write().await;
            if let Some(ref mut s) = *session {
                s.initialized = true;
                info!(
                    "Client initialized (protocol {})",
                    s.protocol_version
                );
            }
        }
        _ => {
            info!("Received notification: {}", request.method);
        }
    }
}
