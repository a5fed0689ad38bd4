//! Tiingo tools module.
//!
//! One file per Tiingo endpoint. Each endpoint declares its name,
//! description, parameter contract, typed parameters and URL builder by
//! implementing [`TiingoEndpoint`]. [`EndpointHandler`] binds an endpoint to
//! the shared [`TiingoClient`]:
//!
//! - `end_of_day`: daily prices for stocks, ETFs and funds
//! - `news`: news feed with ticker/tag/source filters
//! - `forex_prices`, `forex_top`: intraday forex prices and top-of-book
//! - `fundamentals_*`: definitions, statements, daily metrics and meta data
//! - `dividends_*`, `splits`: corporate actions

pub mod client;
pub mod dividends_distributions;
pub mod dividends_yield;
pub mod end_of_day;
pub mod forex_prices;
pub mod forex_top;
pub mod fundamentals_daily;
pub mod fundamentals_definitions;
pub mod fundamentals_meta;
pub mod fundamentals_statements;
pub mod news;
pub mod splits;

use std::marker::PhantomData;
use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domains::tools::contract::{ParamContract, ParamKind, ParamSpec};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{InvocationResult, ToolHandler, ToolSpec};

pub use client::{ApiRequest, TiingoClient};
pub use dividends_distributions::DividendsDistributionsTool;
pub use dividends_yield::DividendsYieldTool;
pub use end_of_day::EndOfDayTool;
pub use forex_prices::ForexPricesTool;
pub use forex_top::ForexTopTool;
pub use fundamentals_daily::FundamentalsDailyTool;
pub use fundamentals_definitions::FundamentalsDefinitionsTool;
pub use fundamentals_meta::FundamentalsMetaTool;
pub use fundamentals_statements::FundamentalsStatementsTool;
pub use news::NewsTool;
pub use splits::SplitsTool;

// ============================================================================
// Shared parameters
// ============================================================================

pub(crate) const TICKER: ParamSpec =
    ParamSpec::required("ticker", ParamKind::String, "Ticker symbol of the asset");

pub(crate) const START_DATE: ParamSpec = ParamSpec::optional(
    "startDate",
    ParamKind::String,
    "Start date in YYYY-MM-DD format (optional)",
);

pub(crate) const END_DATE: ParamSpec = ParamSpec::optional(
    "endDate",
    ParamKind::String,
    "End date in YYYY-MM-DD format (optional)",
);

pub(crate) const START_EX_DATE: ParamSpec = ParamSpec::optional(
    "startExDate",
    ParamKind::String,
    "Start ex-date in YYYY-MM-DD format (optional)",
);

pub(crate) const END_EX_DATE: ParamSpec = ParamSpec::optional(
    "endExDate",
    ParamKind::String,
    "End ex-date in YYYY-MM-DD format (optional)",
);

/// Parameters for endpoints that take none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoParams {}

// ============================================================================
// Endpoint trait
// ============================================================================

/// A Tiingo endpoint exposed as an MCP tool.
pub trait TiingoEndpoint: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Accepted parameters.
    const CONTRACT: ParamContract;

    /// Typed parameters, deserialized after contract validation.
    type Params: DeserializeOwned + Send;

    /// Map typed parameters to the REST request.
    fn build_request(params: Self::Params) -> Result<ApiRequest, ToolError>;

    /// Build the tool spec for this endpoint.
    fn spec(client: Arc<TiingoClient>) -> ToolSpec
    where
        Self: Sized,
    {
        ToolSpec::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::CONTRACT,
            Arc::new(EndpointHandler::<Self>::new(client)),
        )
    }
}

/// Handler that validates, builds the request and fetches it.
pub struct EndpointHandler<E> {
    client: Arc<TiingoClient>,
    endpoint: PhantomData<fn() -> E>,
}

impl<E: TiingoEndpoint> EndpointHandler<E> {
    pub fn new(client: Arc<TiingoClient>) -> Self {
        Self {
            client,
            endpoint: PhantomData,
        }
    }
}

#[async_trait::async_trait]
impl<E: TiingoEndpoint> ToolHandler for EndpointHandler<E> {
    async fn call(&self, arguments: JsonObject) -> InvocationResult {
        // ToolSpec::invoke has already validated the arguments.
        let params: E::Params = E::CONTRACT.deserialize(arguments)?;
        let request = E::build_request(params)?;
        self.client.get_json(&request).await
    }
}

/// Specs for every Tiingo tool, in registration order.
pub fn all_specs(client: Arc<TiingoClient>) -> Vec<ToolSpec> {
    vec![
        EndOfDayTool::spec(client.clone()),
        NewsTool::spec(client.clone()),
        ForexPricesTool::spec(client.clone()),
        ForexTopTool::spec(client.clone()),
        FundamentalsDefinitionsTool::spec(client.clone()),
        FundamentalsStatementsTool::spec(client.clone()),
        FundamentalsDailyTool::spec(client.clone()),
        FundamentalsMetaTool::spec(client.clone()),
        DividendsDistributionsTool::spec(client.clone()),
        DividendsYieldTool::spec(client.clone()),
        SplitsTool::spec(client),
    ]
}
