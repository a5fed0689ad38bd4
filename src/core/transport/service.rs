//! Transport service - picks the transport named by the configuration and
//! hands it the server.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve `server` on the configured transport until it shuts down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!(
            "Serving {} v{} via {}",
            server.name(),
            server.version(),
            self.config.description()
        );

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

#[cfg(all(test, feature = "stdio"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_service_uses_stdio() {
        let service = TransportService::new(TransportConfig::default());
        assert!(service.config().is_stdio());
        assert_eq!(service.config().description(), "STDIO (standard MCP mode)");
    }
}
