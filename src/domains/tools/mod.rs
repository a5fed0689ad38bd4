//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name. Every tool
//! here wraps one Tiingo REST endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per endpoint)
//! - `contract.rs` - Parameter contracts: JSON Schema and validation
//! - `handlers.rs` - `ToolHandler` trait and `ToolSpec`
//! - `registry.rs` - Central tool registry and dispatch
//! - `router.rs` - rmcp ToolRouter built from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/tiingo/` implementing `TiingoEndpoint`
//! 2. Export it in `definitions/tiingo/mod.rs` and add it to `all_specs`
//!
//! **No need to modify `server.rs` or the router!** Both are built from the
//! registry.

pub mod contract;
pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use contract::{ParamContract, ParamKind, ParamSpec};
pub use error::ToolError;
pub use handlers::*;
pub use registry::{RegistrationReport, ToolRegistry};
pub use router::build_tool_router;
