//! Crate-level error type.
//!
//! Wraps the tool-domain and transport errors so `main` can report any
//! startup or serving failure through a single type.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::tools::ToolError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Tool registration or client construction failed.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// A transport failed to start or stopped abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_converts() {
        let err: Error = ToolError::configuration("bad base URL").into();
        assert!(matches!(err, Error::Tool(ToolError::Configuration(_))));
        assert_eq!(err.to_string(), "Tool error: Configuration error: bad base URL");
    }

    #[test]
    fn test_transport_error_converts() {
        let err: Error = TransportError::init("stdin closed").into();
        assert_eq!(err.to_string(), "Transport error: Server initialization error: stdin closed");
    }
}
