//! Fundamentals statements tool.
//!
//! Balance sheet, income statement, cash flow and overview data. `year` and
//! `quarter` are integers and are sent whenever present, `quarter = 0`
//! selecting annual figures.

use serde::Deserialize;

use super::{ApiRequest, END_DATE, START_DATE, TICKER, TiingoEndpoint};
use crate::domains::tools::contract::{ParamContract, ParamKind, ParamSpec};
use crate::domains::tools::error::ToolError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalsStatementsParams {
    pub ticker: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub year: Option<i64>,
    pub quarter: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct FundamentalsStatementsTool;

impl TiingoEndpoint for FundamentalsStatementsTool {
    const NAME: &'static str = "get_fundamentals_statements";

    const DESCRIPTION: &'static str =
        "Fetches historical fundamental statement data (Balance Sheet, Income Statement, Cash Flow, Overview) for a given ticker.";

    const CONTRACT: ParamContract = ParamContract::new(&[
        TICKER,
        START_DATE,
        END_DATE,
        ParamSpec::optional("year", ParamKind::Integer, "Fiscal year (optional)"),
        ParamSpec::optional(
            "quarter",
            ParamKind::Integer,
            "Fiscal quarter (1-4, 0 for annual, optional)",
        ),
    ]);

    type Params = FundamentalsStatementsParams;

    fn build_request(params: FundamentalsStatementsParams) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::new(["fundamentals", params.ticker.as_str(), "statements"])
                .query("startDate", params.start_date)
                .query("endDate", params.end_date)
                .query("year", params.year)
                .query("quarter", params.quarter),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tiingo::tests::url_of;
    use serde_json::json;

    #[test]
    fn test_year_and_quarter() {
        let url = url_of::<FundamentalsStatementsTool>(json!({
            "ticker": "AAPL",
            "year": 2023,
            "quarter": 2
        }))
        .unwrap();
        assert_eq!(
            url,
            "https://api.tiingo.com/tiingo/fundamentals/AAPL/statements?year=2023&quarter=2"
        );
    }

    #[test]
    fn test_quarter_zero_selects_annual() {
        let url =
            url_of::<FundamentalsStatementsTool>(json!({"ticker": "AAPL", "quarter": 0})).unwrap();
        assert_eq!(
            url,
            "https://api.tiingo.com/tiingo/fundamentals/AAPL/statements?quarter=0"
        );
    }

    #[test]
    fn test_integral_float_year_is_sent_as_integer() {
        let url = url_of::<FundamentalsStatementsTool>(json!({"ticker": "AAPL", "year": 2023.0}))
            .unwrap();
        assert_eq!(
            url,
            "https://api.tiingo.com/tiingo/fundamentals/AAPL/statements?year=2023"
        );
    }

    #[test]
    fn test_string_year_rejected() {
        let err = url_of::<FundamentalsStatementsTool>(json!({"ticker": "AAPL", "year": "2023"}))
            .unwrap_err();
        assert!(err.to_string().contains("year: expected an integer"));
    }
}
