//! Fundamentals daily metrics tool.

use serde::Deserialize;

use super::{ApiRequest, END_DATE, START_DATE, TICKER, TiingoEndpoint};
use crate::domains::tools::contract::{ParamContract, ParamKind, ParamSpec};
use crate::domains::tools::error::ToolError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalsDailyParams {
    pub ticker: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Comma-separated metric names, e.g. `marketCap,peRatio`.
    pub columns: Option<String>,
}

/// Daily metrics such as market cap, enterprise value and P/E ratio.
#[derive(Debug, Clone)]
pub struct FundamentalsDailyTool;

impl TiingoEndpoint for FundamentalsDailyTool {
    const NAME: &'static str = "get_fundamentals_daily_metrics";

    const DESCRIPTION: &'static str =
        "Fetches daily fundamental metrics for a given ticker.";

    const CONTRACT: ParamContract = ParamContract::new(&[
        TICKER,
        START_DATE,
        END_DATE,
        ParamSpec::optional(
            "columns",
            ParamKind::String,
            "Comma-separated list of columns/metrics to return (optional)",
        ),
    ]);

    type Params = FundamentalsDailyParams;

    fn build_request(params: FundamentalsDailyParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::new(["fundamentals", params.ticker.as_str(), "daily"])
            .query("startDate", params.start_date)
            .query("endDate", params.end_date)
            .query("columns", params.columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tiingo::tests::url_of;
    use serde_json::json;

    #[test]
    fn test_daily_url_with_columns() {
        let url = url_of::<FundamentalsDailyTool>(json!({
            "ticker": "AAPL",
            "startDate": "2024-01-01",
            "columns": "marketCap,peRatio"
        }))
        .unwrap();
        assert_eq!(
            url,
            "https://api.tiingo.com/tiingo/fundamentals/AAPL/daily?startDate=2024-01-01&columns=marketCap%2CpeRatio"
        );
    }
}
