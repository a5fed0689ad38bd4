//! Dividend distributions tool.

use serde::Deserialize;

use super::{ApiRequest, END_EX_DATE, START_EX_DATE, TICKER, TiingoEndpoint};
use crate::domains::tools::contract::ParamContract;
use crate::domains::tools::error::ToolError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendsDistributionsParams {
    pub ticker: String,
    pub start_ex_date: Option<String>,
    pub end_ex_date: Option<String>,
}

/// Historical dividend distributions, filtered by ex-date.
#[derive(Debug, Clone)]
pub struct DividendsDistributionsTool;

impl TiingoEndpoint for DividendsDistributionsTool {
    const NAME: &'static str = "get_dividends_distributions";

    const DESCRIPTION: &'static str =
        "Fetches historical dividend distribution data for a given ticker.";

    const CONTRACT: ParamContract = ParamContract::new(&[TICKER, START_EX_DATE, END_EX_DATE]);

    type Params = DividendsDistributionsParams;

    fn build_request(params: DividendsDistributionsParams) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::new(["corporate-actions", params.ticker.as_str(), "distributions"])
                .query("startExDate", params.start_ex_date)
                .query("endExDate", params.end_ex_date),
        )
    }
}
