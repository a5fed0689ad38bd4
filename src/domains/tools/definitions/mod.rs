//! Tool definitions module.
//!
//! Each tool is defined in its own file under `tiingo/`, one file per
//! Tiingo endpoint, together with the shared REST client.

pub mod tiingo;

pub use tiingo::{
    DividendsDistributionsTool, DividendsYieldTool, EndOfDayTool, ForexPricesTool, ForexTopTool,
    FundamentalsDailyTool, FundamentalsDefinitionsTool, FundamentalsMetaTool,
    FundamentalsStatementsTool, NewsTool, SplitsTool, TiingoClient, TiingoEndpoint, all_specs,
};
