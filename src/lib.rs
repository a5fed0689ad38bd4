//! Tiingo MCP Server Library
//!
//! This crate exposes the Tiingo financial data REST API (end-of-day prices,
//! news, forex, fundamentals, dividends and splits) as Model Context
//! Protocol tools.
//!
//! # Architecture
//!
//! - **core**: Core infrastructure including configuration, error handling, the main
//!   server and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: parameter contracts, the tool registry and one tool per Tiingo endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use tiingo_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
