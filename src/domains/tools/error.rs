//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool registration and invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Missing or unusable configuration (API token, base URL).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {message}")]
    Validation {
        /// Names of the offending parameters (may be empty).
        fields: Vec<String>,
        message: String,
    },

    /// The Tiingo API answered with a non-success status.
    #[error("Tiingo API error: {status} {status_text} - {body}")]
    Remote {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Network-level failure (DNS, connection refused, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body is not valid JSON.
    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),
}

impl ToolError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a validation error from `(field, reason)` pairs.
    pub fn invalid_fields<I, F, R>(problems: I) -> Self
    where
        I: IntoIterator<Item = (F, R)>,
        F: Into<String>,
        R: std::fmt::Display,
    {
        let mut fields = Vec::new();
        let mut parts = Vec::new();
        for (field, reason) in problems {
            let field = field.into();
            parts.push(format!("{field}: {reason}"));
            fields.push(field);
        }
        Self::Validation {
            fields,
            message: parts.join("; "),
        }
    }

    /// Create a validation error that is not tied to a single field.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::Validation {
            fields: Vec::new(),
            message: msg.into(),
        }
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::ToolNotFound(_))
    }

    /// JSON-RPC error code used by the HTTP transport.
    pub fn json_rpc_code(&self) -> i32 {
        if self.is_client_error() { -32602 } else { -32603 }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let message = err.to_string();
        match err {
            ToolError::Validation { fields, .. } => {
                McpError::invalid_params(message, Some(serde_json::json!({ "fields": fields })))
            }
            ToolError::ToolNotFound(_) => McpError::invalid_params(message, None),
            ToolError::Remote { status, .. } => {
                McpError::internal_error(message, Some(serde_json::json!({ "status": status })))
            }
            _ => McpError::internal_error(message, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_collects_names() {
        let err = ToolError::invalid_fields([
            ("ticker", "is required"),
            ("limit", "expected an integer"),
        ]);
        match &err {
            ToolError::Validation { fields, message } => {
                assert_eq!(fields, &vec!["ticker".to_string(), "limit".to_string()]);
                assert_eq!(message, "ticker: is required; limit: expected an integer");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Invalid arguments:"));
    }

    #[test]
    fn test_remote_error_message() {
        let err = ToolError::Remote {
            status: 404,
            status_text: "Not Found".to_string(),
            body: r#"{"detail":"Not found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Tiingo API error: 404 Not Found - {"detail":"Not found"}"#
        );
    }

    #[test]
    fn test_mcp_error_mapping() {
        let validation: McpError = ToolError::invalid_fields([("ticker", "is required")]).into();
        assert_eq!(validation.code.0, -32602);
        assert_eq!(validation.data, Some(serde_json::json!({ "fields": ["ticker"] })));

        let remote: McpError = ToolError::Remote {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: String::new(),
        }
        .into();
        assert_eq!(remote.code.0, -32603);
        assert!(remote.message.contains("500"));

        let config: McpError = ToolError::configuration("TIINGO_API_TOKEN is not set").into();
        assert_eq!(config.code.0, -32603);
    }

    #[test]
    fn test_json_rpc_code() {
        assert_eq!(ToolError::not_found("x").json_rpc_code(), -32602);
        assert_eq!(ToolError::duplicate("x").json_rpc_code(), -32603);
    }
}
