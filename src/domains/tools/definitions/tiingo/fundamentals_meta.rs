//! Fundamentals meta data tool.

use super::{ApiRequest, NoParams, TiingoEndpoint};
use crate::domains::tools::contract::ParamContract;
use crate::domains::tools::error::ToolError;

#[derive(Debug, Clone)]
pub struct FundamentalsMetaTool;

impl TiingoEndpoint for FundamentalsMetaTool {
    const NAME: &'static str = "get_fundamentals_meta";

    const DESCRIPTION: &'static str =
        "Fetches fundamental meta data for companies.";

    const CONTRACT: ParamContract = ParamContract::empty();

    type Params = NoParams;

    fn build_request(_params: NoParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::new(["fundamentals", "meta"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tiingo::tests::url_of;
    use serde_json::json;

    #[test]
    fn test_meta_url() {
        let url = url_of::<FundamentalsMetaTool>(json!({})).unwrap();
        assert_eq!(url, "https://api.tiingo.com/tiingo/fundamentals/meta");
    }

    #[test]
    fn test_schema_has_no_properties() {
        let schema = FundamentalsMetaTool::CONTRACT.input_schema();
        assert_eq!(schema["properties"], json!({}));
    }
}
