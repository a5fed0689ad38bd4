//! Tool handlers and specs.
//!
//! A [`ToolSpec`] pairs a parameter contract with an asynchronous
//! [`ToolHandler`]. Specs are built once at startup and shared by the MCP
//! router and the HTTP dispatcher.

use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::contract::ParamContract;
use super::error::ToolError;

/// Outcome of a single tool invocation: pass-through JSON or a failure.
pub type InvocationResult = Result<Value, ToolError>;

/// Trait implemented by tool logic.
///
/// `arguments` have already been validated against the tool's contract.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, arguments: JsonObject) -> InvocationResult;
}

/// A named, self-describing, invocable tool.
#[derive(Clone)]
pub struct ToolSpec {
    name: &'static str,
    description: &'static str,
    contract: ParamContract,
    handler: Arc<dyn ToolHandler>,
}

impl ToolSpec {
    pub fn new(
        name: &'static str,
        description: &'static str,
        contract: ParamContract,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name,
            description,
            contract,
            handler,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn contract(&self) -> &ParamContract {
        &self.contract
    }

    /// Create a Tool model for this spec (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.contract.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Validate `arguments`, run the handler and wrap its JSON output.
    #[instrument(skip_all, fields(tool = self.name))]
    pub async fn invoke(&self, arguments: Option<JsonObject>) -> Result<CallToolResult, ToolError> {
        let arguments = arguments.unwrap_or_default();
        self.contract.validate(&arguments)?;

        match self.handler.call(arguments).await {
            Ok(payload) => {
                debug!("Tool {} succeeded", self.name);
                text_result(&payload)
            }
            Err(e) => {
                warn!("Tool {} failed: {}", self.name, e);
                Err(e)
            }
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(&self) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        let spec = self.clone();
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let spec = spec.clone();
            async move { spec.invoke(args).await.map_err(McpError::from) }.boxed()
        })
    }
}

impl fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("contract", &self.contract)
            .finish_non_exhaustive()
    }
}

/// Wrap a JSON payload as a single pretty-printed text content block.
pub fn text_result(payload: &Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(payload)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
