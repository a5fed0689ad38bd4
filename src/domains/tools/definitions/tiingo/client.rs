//! Tiingo REST client.
//!
//! Builds request URLs from an [`ApiRequest`], issues a single authenticated
//! GET and relays the JSON body verbatim. No retries and no caching: the host
//! decides whether a failed call is worth repeating.

use std::fmt;

use reqwest::{
    Client, Url,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::core::config::TiingoConfig;
use crate::domains::tools::error::ToolError;

/// A GET request against the Tiingo API, relative to the configured base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Start a request for the given path segments (e.g. `["daily", "AAPL", "prices"]`).
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter if it is present.
    ///
    /// `None` and empty values are skipped so the URL never carries an
    /// empty-valued parameter.
    pub fn query<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value.map(|v| v.to_string()).filter(|v| !v.is_empty()) {
            self.query.push((name, value));
        }
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }
}

/// HTTP client for the Tiingo API.
#[derive(Clone)]
pub struct TiingoClient {
    http: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl TiingoClient {
    /// Build a client from configuration.
    ///
    /// Fails if the base URL cannot carry path segments. A missing token is
    /// accepted here and reported on each call instead.
    pub fn new(config: &TiingoConfig) -> Result<Self, ToolError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ToolError::configuration(format!(
                "invalid Tiingo base URL '{}': {}",
                config.base_url, e
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ToolError::configuration(format!(
                "Tiingo base URL '{}' cannot carry a path",
                config.base_url
            )));
        }

        let api_token = config.api_token.clone().filter(|t| !t.trim().is_empty());

        Ok(Self {
            http: Client::new(),
            base_url,
            api_token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.api_token.is_some()
    }

    /// Resolve a request against the base URL.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, ToolError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ToolError::configuration("Tiingo base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(request.segments.iter());

        if !request.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// Fetch a request and return the response body as JSON, unmodified.
    #[instrument(skip_all, fields(path = %request.segments.join("/")))]
    pub async fn get_json(&self, request: &ApiRequest) -> Result<Value, ToolError> {
        let token = self.api_token.as_deref().ok_or_else(|| {
            ToolError::configuration("TIINGO_API_TOKEN environment variable is not set.")
        })?;

        let url = self.url_for(request)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Token {token}"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!("Tiingo API returned {}", status);
            return Err(ToolError::Remote {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Custom Debug implementation to redact the API token.
impl fmt::Debug for TiingoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TiingoClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
