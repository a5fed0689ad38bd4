//! Dividend yield tool.

use serde::Deserialize;

use super::{ApiRequest, END_DATE, START_DATE, TICKER, TiingoEndpoint};
use crate::domains::tools::contract::ParamContract;
use crate::domains::tools::error::ToolError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendsYieldParams {
    pub ticker: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DividendsYieldTool;

impl TiingoEndpoint for DividendsYieldTool {
    const NAME: &'static str = "get_dividends_yield";

    const DESCRIPTION: &'static str =
        "Fetches historical dividend yield data for a given ticker.";

    const CONTRACT: ParamContract = ParamContract::new(&[TICKER, START_DATE, END_DATE]);

    type Params = DividendsYieldParams;

    fn build_request(params: DividendsYieldParams) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::new(["corporate-actions", params.ticker.as_str(), "distribution-yield"])
                .query("startDate", params.start_date)
                .query("endDate", params.end_date),
        )
    }
}
