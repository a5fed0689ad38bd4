//! Stock splits tool.

use serde::Deserialize;

use super::{ApiRequest, END_EX_DATE, START_EX_DATE, TICKER, TiingoEndpoint};
use crate::domains::tools::contract::ParamContract;
use crate::domains::tools::error::ToolError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitsParams {
    pub ticker: String,
    pub start_ex_date: Option<String>,
    pub end_ex_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SplitsTool;

impl TiingoEndpoint for SplitsTool {
    const NAME: &'static str = "get_splits";

    const DESCRIPTION: &'static str =
        "Fetches historical split data for a given ticker.";

    const CONTRACT: ParamContract = ParamContract::new(&[TICKER, START_EX_DATE, END_EX_DATE]);

    type Params = SplitsParams;

    fn build_request(params: SplitsParams) -> Result<ApiRequest, ToolError> {
        Ok(
            ApiRequest::new(["corporate-actions", params.ticker.as_str(), "splits"])
                .query("startExDate", params.start_ex_date)
                .query("endExDate", params.end_ex_date),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tiingo::tests::url_of;
    use serde_json::json;

    #[test]
    fn test_splits_url() {
        let url =
            url_of::<SplitsTool>(json!({"ticker": "NVDA", "startExDate": "2024-01-01"})).unwrap();
        assert_eq!(
            url,
            "https://api.tiingo.com/tiingo/corporate-actions/NVDA/splits?startExDate=2024-01-01"
        );
    }

    #[test]
    fn test_ticker_is_path_encoded() {
        let url = url_of::<SplitsTool>(json!({"ticker": "BRK/A"})).unwrap();
        assert_eq!(
            url,
            "https://api.tiingo.com/tiingo/corporate-actions/BRK%2FA/splits"
        );
    }
}
