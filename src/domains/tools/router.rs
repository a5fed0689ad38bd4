//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each registered spec knows how to create its own route, so the router
//! always lists exactly what the registry holds.

use rmcp::handler::server::tool::ToolRouter;

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .specs()
        .iter()
        .fold(ToolRouter::new(), |router, spec| router.with_route(spec.create_route()))
}
