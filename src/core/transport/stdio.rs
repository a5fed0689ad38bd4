//! STDIO transport.
//!
//! The default MCP mode: one client, newline-delimited JSON-RPC over
//! stdin/stdout. Logs go to stderr so stdout stays protocol-clean.

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve `server` until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let name = server.name().to_string();
        info!(
            "{} ready - {} tools over stdin/stdout",
            name,
            server.registry().len()
        );

        let running = server
            .serve(stdio())
            .await
            .map_err(|e| TransportError::init(format!("{name}: {e}")))?;

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("{} stdio session ended: {:?}", name, reason);
        Ok(())
    }
}
