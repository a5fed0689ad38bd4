//! Forex top-of-book tool.
//!
//! Either a single pair through the path form `fx/{ticker}/top` or several
//! pairs through the query form `fx/top?tickers=...`. When both are given
//! the path form wins.

use serde::Deserialize;

use super::{ApiRequest, TiingoEndpoint};
use crate::domains::tools::contract::{ParamContract, ParamKind, ParamSpec};
use crate::domains::tools::error::ToolError;

/// Parameters for top-of-book requests. At least one field must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForexTopParams {
    pub ticker: Option<String>,
    pub tickers: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ForexTopTool;

impl TiingoEndpoint for ForexTopTool {
    const NAME: &'static str = "get_forex_top_of_book";

    const DESCRIPTION: &'static str =
        "Fetches real-time Forex Top-of-Book/Last data for one or more ticker symbols.";

    const CONTRACT: ParamContract = ParamContract::new(&[
        ParamSpec::optional("ticker", ParamKind::String, "Forex ticker symbol (e.g., EURUSD)"),
        ParamSpec::optional(
            "tickers",
            ParamKind::String,
            "Comma-separated Forex ticker symbols (optional)",
        ),
    ]);

    type Params = ForexTopParams;

    fn build_request(params: ForexTopParams) -> Result<ApiRequest, ToolError> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

        match (non_empty(params.ticker), non_empty(params.tickers)) {
            (Some(ticker), _) => Ok(ApiRequest::new(["fx", ticker.as_str(), "top"])),
            (None, Some(tickers)) => {
                Ok(ApiRequest::new(["fx", "top"]).query("tickers", Some(tickers)))
            }
            (None, None) => Err(ToolError::invalid_fields([
                ("ticker", "either \"ticker\" or \"tickers\" must be provided"),
                ("tickers", "either \"ticker\" or \"tickers\" must be provided"),
            ])),
        }
    }
}
