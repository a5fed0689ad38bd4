//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The ordered set of registered [`ToolSpec`]s
//! - A result-collecting `register_all` that never aborts early
//! - Name-based dispatch shared by every transport

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, warn};

use super::definitions::{TiingoClient, all_specs};
use super::error::ToolError;
use super::handlers::ToolSpec;

// ============================================================================
// Registration report
// ============================================================================

/// Outcome of a bulk registration.
#[derive(Debug, Default)]
pub struct RegistrationReport {
    /// Names registered successfully, in order.
    pub registered: Vec<&'static str>,
    /// Names that failed, with the reason.
    pub failed: Vec<(&'static str, ToolError)>,
}

impl RegistrationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Debug, Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every Tiingo tool, backed by one shared client.
    pub fn tiingo(client: Arc<TiingoClient>) -> (Self, RegistrationReport) {
        let mut registry = Self::new();
        let report = registry.register_all(all_specs(client));
        (registry, report)
    }

    /// Register a single tool. Fails if the name is already taken; the
    /// existing tool stays in place.
    pub fn register(&mut self, spec: ToolSpec) -> Result<(), ToolError> {
        if self.get(spec.name()).is_some() {
            return Err(ToolError::duplicate(spec.name()));
        }
        debug!("Registered tool: {}", spec.name());
        self.tools.push(spec);
        Ok(())
    }

    /// Register every spec, collecting successes and failures.
    pub fn register_all<I>(&mut self, specs: I) -> RegistrationReport
    where
        I: IntoIterator<Item = ToolSpec>,
    {
        specs
            .into_iter()
            .fold(RegistrationReport::default(), |mut report, spec| {
                let name = spec.name();
                match self.register(spec) {
                    Ok(()) => report.registered.push(name),
                    Err(e) => {
                        warn!("Failed to register tool {}: {}", name, e);
                        report.failed.push((name, e));
                    }
                }
                report
            })
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.iter().find(|spec| spec.name() == name)
    }

    /// Registered specs, in registration order.
    pub fn specs(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(ToolSpec::name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both the rmcp router and the HTTP transport list tools from here.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolSpec::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Dispatch a tool call by name.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let spec = self.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })?;
        spec.invoke(arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::contract::ParamContract;
    use crate::domains::tools::definitions::tiingo::client::tests::{
        TEST_TOKEN, client_for, offline_client,
    };
    use crate::domains::tools::handlers::{InvocationResult, ToolHandler};
    use httpmock::prelude::*;
    use rmcp::model::RawContent;
    use serde_json::{Value, json};

    struct Fixed(&'static str);

    #[async_trait::async_trait]
    impl ToolHandler for Fixed {
        async fn call(&self, _arguments: JsonObject) -> InvocationResult {
            Ok(json!({"from": self.0}))
        }
    }

    fn fixed(name: &'static str, tag: &'static str) -> ToolSpec {
        ToolSpec::new(name, "Fixed output", ParamContract::empty(), Arc::new(Fixed(tag)))
    }

    fn text_of(result: &CallToolResult) -> Value {
        match &result.content[0].raw {
            RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
            _ => panic!("Expected text content"),
        }
    }

    /// Valid arguments for each tool, keyed by name.
    fn valid_arguments(name: &str) -> Option<JsonObject> {
        let value = match name {
            "get_news" | "get_fundamentals_definitions" | "get_fundamentals_meta" => json!({}),
            "get_forex_prices" | "get_forex_top_of_book" => json!({"ticker": "eurusd"}),
            _ => json!({"ticker": "AAPL"}),
        };
        value.as_object().cloned()
    }

    #[test]
    fn test_tiingo_registry_order() {
        let (registry, report) = ToolRegistry::tiingo(Arc::new(offline_client()));
        assert!(report.is_complete());
        assert_eq!(report.registered.len(), 11);
        assert_eq!(registry.len(), 11);
        assert_eq!(registry.tool_names(), report.registered);
        assert_eq!(registry.tool_names()[0], "get_end_of_day_prices");
        assert_eq!(registry.tool_names()[10], "get_splits");
    }

    #[test]
    fn test_tool_metadata_is_complete() {
        let (registry, _) = ToolRegistry::tiingo(Arc::new(offline_client()));
        for tool in registry.tools() {
            assert!(tool.description.as_deref().is_some_and(|d| !d.is_empty()));
            assert_eq!(tool.input_schema["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_duplicate_is_reported_and_first_kept() {
        let mut registry = ToolRegistry::new();
        let report = registry.register_all([
            fixed("same", "first"),
            fixed("other", "x"),
            fixed("same", "second"),
        ]);

        assert_eq!(report.registered, vec!["same", "other"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "same");
        assert!(matches!(report.failed[0].1, ToolError::DuplicateTool(_)));

        let result = registry.dispatch("same", None).await.unwrap();
        assert_eq!(text_of(&result), json!({"from": "first"}));

        let result = registry.dispatch("other", None).await.unwrap();
        assert_eq!(text_of(&result), json!({"from": "x"}));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = registry.dispatch("unknown", None).await.unwrap_err();
        assert!(matches!(err, ToolError::ToolNotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_required_params_never_reach_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = Arc::new(client_for(&server.url("/tiingo"), Some(TEST_TOKEN)));
        let (registry, _) = ToolRegistry::tiingo(client);

        let mut checked = 0;
        for spec in registry.specs() {
            let needs_something = spec.contract().params().iter().any(|p| p.required)
                || spec.name() == "get_forex_top_of_book";
            if !needs_something {
                continue;
            }
            let err = registry.dispatch(spec.name(), None).await.unwrap_err();
            assert!(matches!(err, ToolError::Validation { .. }), "{}", spec.name());
            checked += 1;
        }

        assert_eq!(checked, 8);
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_missing_token_fails_every_tool_without_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = Arc::new(client_for(&server.url("/tiingo"), None));
        let (registry, _) = ToolRegistry::tiingo(client);

        for name in registry.tool_names() {
            let err = registry.dispatch(name, valid_arguments(name)).await.unwrap_err();
            assert!(matches!(err, ToolError::Configuration(_)), "{name}");
        }
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_dispatch_end_to_end() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/tiingo/daily/AAPL/prices")
                    .query_param("startDate", "2024-01-02")
                    .header("authorization", "Token test-token");
                then.status(200)
                    .json_body(json!([{"date": "2024-01-02T00:00:00.000Z", "close": 185.64}]));
            })
            .await;

        let client = Arc::new(client_for(&server.url("/tiingo"), Some(TEST_TOKEN)));
        let (registry, _) = ToolRegistry::tiingo(client);

        let arguments = json!({"ticker": "AAPL", "startDate": "2024-01-02"}).as_object().cloned();
        let result = registry.dispatch("get_end_of_day_prices", arguments).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            text_of(&result),
            json!([{"date": "2024-01-02T00:00:00.000Z", "close": 185.64}])
        );
    }

    #[tokio::test]
    async fn test_dispatch_sends_integral_float_as_integer() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/tiingo/fundamentals/AAPL/statements")
                    .query_param("year", "2023")
                    .query_param("quarter", "0");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = Arc::new(client_for(&server.url("/tiingo"), Some(TEST_TOKEN)));
        let (registry, _) = ToolRegistry::tiingo(client);

        let arguments = json!({"ticker": "AAPL", "year": 2023.0, "quarter": 0.0})
            .as_object()
            .cloned();
        let result = registry
            .dispatch("get_fundamentals_statements", arguments)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text_of(&result), json!([]));
    }

    #[tokio::test]
    async fn test_remote_failure_propagates() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/tiingo/fx/top");
                then.status(401).body("Invalid token");
            })
            .await;

        let client = Arc::new(client_for(&server.url("/tiingo"), Some(TEST_TOKEN)));
        let (registry, _) = ToolRegistry::tiingo(client);

        let arguments = json!({"tickers": "eurusd,gbpusd"}).as_object().cloned();
        let err = registry
            .dispatch("get_forex_top_of_book", arguments)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Remote { status: 401, .. }));
        assert!(err.to_string().contains("Invalid token"));
    }
}
