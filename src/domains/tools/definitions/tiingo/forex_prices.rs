//! Forex intraday prices tool.

use serde::Deserialize;

use super::{ApiRequest, END_DATE, START_DATE, TiingoEndpoint};
use crate::domains::tools::contract::{ParamContract, ParamKind, ParamSpec};
use crate::domains::tools::error::ToolError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForexPricesParams {
    pub ticker: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub resample_freq: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ForexPricesTool;

impl TiingoEndpoint for ForexPricesTool {
    const NAME: &'static str = "get_forex_prices";

    const DESCRIPTION: &'static str =
        "Fetches historical intraday Forex prices for a given ticker symbol with optional date range and frequency.";

    const CONTRACT: ParamContract = ParamContract::new(&[
        ParamSpec::required("ticker", ParamKind::String, "Forex ticker symbol (e.g., EURUSD)"),
        START_DATE,
        END_DATE,
        ParamSpec::optional(
            "resampleFreq",
            ParamKind::String,
            "Resample frequency (e.g., 5min, 1day)",
        ),
    ]);

    type Params = ForexPricesParams;

    fn build_request(params: ForexPricesParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::new(["fx", params.ticker.as_str(), "prices"])
            .query("startDate", params.start_date)
            .query("endDate", params.end_date)
            .query("resampleFreq", params.resample_freq))
    }
}
