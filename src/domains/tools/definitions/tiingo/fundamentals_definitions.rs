//! Fundamentals definitions tool.

use super::{ApiRequest, NoParams, TiingoEndpoint};
use crate::domains::tools::contract::ParamContract;
use crate::domains::tools::error::ToolError;

/// Lists the fundamental metrics Tiingo provides and what they mean.
#[derive(Debug, Clone)]
pub struct FundamentalsDefinitionsTool;

impl TiingoEndpoint for FundamentalsDefinitionsTool {
    const NAME: &'static str = "get_fundamentals_definitions";

    const DESCRIPTION: &'static str =
        "Fetches available fundamental metrics and their definitions.";

    const CONTRACT: ParamContract = ParamContract::empty();

    type Params = NoParams;

    fn build_request(_params: NoParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::new(["fundamentals", "definitions"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tiingo::tests::url_of;
    use serde_json::json;

    #[test]
    fn test_definitions_url_ignores_extra_keys() {
        let url = url_of::<FundamentalsDefinitionsTool>(json!({"ticker": "AAPL"})).unwrap();
        assert_eq!(url, "https://api.tiingo.com/tiingo/fundamentals/definitions");
    }
}
