//! End-of-day prices tool.
//!
//! Daily open/high/low/close/volume (raw and adjusted) for stocks, ETFs and
//! mutual funds.

use serde::Deserialize;

use super::{ApiRequest, END_DATE, START_DATE, TICKER, TiingoEndpoint};
use crate::domains::tools::contract::{ParamContract, ParamKind, ParamSpec};
use crate::domains::tools::error::ToolError;

/// Parameters for end-of-day price requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndOfDayParams {
    pub ticker: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// e.g. `daily`, `weekly`, `monthly`, `annually`
    pub resample_freq: Option<String>,
}

/// End-of-day prices tool.
#[derive(Debug, Clone)]
pub struct EndOfDayTool;

impl TiingoEndpoint for EndOfDayTool {
    const NAME: &'static str = "get_end_of_day_prices";

    const DESCRIPTION: &'static str =
        "Fetches End-of-Day prices for a given ticker symbol with optional date range and format.";

    const CONTRACT: ParamContract = ParamContract::new(&[
        TICKER,
        START_DATE,
        END_DATE,
        ParamSpec::optional(
            "resampleFreq",
            ParamKind::String,
            "Resample frequency (e.g., daily, monthly)",
        ),
    ]);

    type Params = EndOfDayParams;

    fn build_request(params: EndOfDayParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::new(["daily", params.ticker.as_str(), "prices"])
            .query("startDate", params.start_date)
            .query("endDate", params.end_date)
            .query("resampleFreq", params.resample_freq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tiingo::tests::url_of;
    use serde_json::json;

    #[test]
    fn test_ticker_only() {
        let url = url_of::<EndOfDayTool>(json!({"ticker": "AAPL"})).unwrap();
        assert_eq!(url, "https://api.tiingo.com/tiingo/daily/AAPL/prices");
    }

    #[test]
    fn test_full_query() {
        let url = url_of::<EndOfDayTool>(json!({
            "ticker": "AAPL",
            "startDate": "2024-01-02",
            "endDate": "2024-01-31",
            "resampleFreq": "weekly"
        }))
        .unwrap();
        assert_eq!(
            url,
            "https://api.tiingo.com/tiingo/daily/AAPL/prices?startDate=2024-01-02&endDate=2024-01-31&resampleFreq=weekly"
        );
    }

    #[test]
    fn test_empty_optional_is_dropped() {
        let url = url_of::<EndOfDayTool>(json!({"ticker": "MSFT", "startDate": ""})).unwrap();
        assert_eq!(url, "https://api.tiingo.com/tiingo/daily/MSFT/prices");
    }

    #[test]
    fn test_empty_ticker_rejected() {
        let err = url_of::<EndOfDayTool>(json!({"ticker": ""})).unwrap_err();
        assert!(matches!(err, ToolError::Validation { .. }));
    }
}
