//! News tool.
//!
//! Curated financial news, filterable by tickers, tags, countries, topics
//! and sources. All list-valued filters are passed as comma-separated
//! strings, exactly as the API expects them.

use std::fmt;

use serde::Deserialize;

use super::{ApiRequest, END_DATE, START_DATE, TiingoEndpoint};
use crate::domains::tools::contract::{ParamContract, ParamKind, ParamSpec};
use crate::domains::tools::error::ToolError;

const SORT_BY: &[&str] = &["publishedDate", "crawlDate"];
const SORT_ORDER: &[&str] = &["asc", "desc"];

/// Field used to order articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    PublishedDate,
    CrawlDate,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PublishedDate => "publishedDate",
            Self::CrawlDate => "crawlDate",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Parameters for news requests. Every filter is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsParams {
    pub tickers: Option<String>,
    pub tags: Option<String>,
    pub countries: Option<String>,
    pub topics: Option<String>,
    pub sources: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<i64>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

/// News tool.
#[derive(Debug, Clone)]
pub struct NewsTool;

impl TiingoEndpoint for NewsTool {
    const NAME: &'static str = "get_news";

    const DESCRIPTION: &'static str =
        "Fetches news articles from Tiingo with various filtering options.";

    const CONTRACT: ParamContract = ParamContract::new(&[
        ParamSpec::optional(
            "tickers",
            ParamKind::String,
            "Comma-separated ticker symbols (optional)",
        ),
        ParamSpec::optional("tags", ParamKind::String, "Comma-separated tags (optional)"),
        ParamSpec::optional(
            "countries",
            ParamKind::String,
            "Comma-separated country codes (optional)",
        ),
        ParamSpec::optional("topics", ParamKind::String, "Comma-separated topics (optional)"),
        ParamSpec::optional(
            "sources",
            ParamKind::String,
            "Comma-separated news sources (optional)",
        ),
        START_DATE,
        END_DATE,
        ParamSpec::optional(
            "limit",
            ParamKind::Integer,
            "Maximum number of articles to return (optional)",
        ),
        ParamSpec::optional(
            "sortBy",
            ParamKind::OneOf(SORT_BY),
            "Sort by publishedDate or crawlDate (optional)",
        ),
        ParamSpec::optional(
            "sortOrder",
            ParamKind::OneOf(SORT_ORDER),
            "Sort order (asc or desc, optional)",
        ),
    ]);

    type Params = NewsParams;

    fn build_request(params: NewsParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::new(["news"])
            .query("tickers", params.tickers)
            .query("tags", params.tags)
            .query("countries", params.countries)
            .query("topics", params.topics)
            .query("sources", params.sources)
            .query("startDate", params.start_date)
            .query("endDate", params.end_date)
            .query("limit", params.limit)
            .query("sortBy", params.sort_by)
            .query("sortOrder", params.sort_order))
    }
}
