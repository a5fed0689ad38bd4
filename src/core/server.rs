//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/tiingo/` with one file
//! per endpoint. At construction the server builds one shared
//! [`TiingoClient`], registers every tool and derives the rmcp ToolRouter
//! from the registry. **Adding a new tool does NOT require modifying this
//! file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router, definitions::TiingoClient};

/// The main MCP server handler.
///
/// Implements `ServerHandler` from rmcp. The registry is shared with the
/// HTTP transport so both dispatch paths run the same tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the Tiingo client cannot be built (unusable base URL).
    /// A missing API token is logged and reported on every call instead.
    pub fn new(config: Config) -> error::Result<Self> {
        let client = TiingoClient::new(&config.tiingo)?;
        if !client.has_token() {
            warn!("TIINGO_API_TOKEN is not set - every tool call will fail until it is provided");
        }

        let (registry, report) = ToolRegistry::tiingo(Arc::new(client));
        info!(
            "Registered {} tools ({} failed)",
            report.registered.len(),
            report.failed.len()
        );

        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an existing registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Dispatches through the registry and serializes the `CallToolResult`
    /// as it would appear on the wire.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            _ => return Err(ToolError::invalid_arguments("arguments must be a JSON object")),
        };

        let result = self.registry.dispatch(name, arguments).await?;
        Ok(serde_json::to_value(result)?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "MCP Server exposing Tiingo API endpoints as tools: end-of-day prices, news, \
                 forex, fundamentals, dividends and splits. Results are the raw Tiingo JSON."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
