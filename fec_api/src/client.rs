//! HTTP client for the OpenFEC API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ContributionQuery, Query},
    types::PageResponse,
    Error,
};

/// Production OpenFEC base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.open.fec.gov/v1";

/// Itemized individual contributions search.
const CONTRIBUTIONS_PATH: &str = "/schedules/schedule_a/";

/// Request timeout for OpenFEC API calls. Deep pages are slow to serve.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

/// HTTP client for the OpenFEC API.
///
/// Holds one `reqwest::Client` for connection reuse. The API key travels in
/// each query rather than on the client, see [`Query::with_api_key`].
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production OpenFEC API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Builds the full contributions search URL for `query`, page included.
    pub fn contributions_url(&self, query: &ContributionQuery) -> Result<Url, Error> {
        self.get_url(CONTRIBUTIONS_PATH, query)
    }

    /// Performs a GET and returns the body of a successful response.
    pub async fn get_text(&self, url: &Url) -> Result<String, Error> {
        tracing::debug!("GET {}", redact(url));
        let resp = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Network(e)
        })?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::error!("Rate limited on {}", redact(url));
            return Err(Error::RateLimited);
        } else if status == reqwest::StatusCode::FORBIDDEN {
            tracing::error!("API key rejected on {}", redact(url));
            return Err(Error::InvalidApiKey);
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    /// Performs a GET and deserializes the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, Error> {
        let body = self.get_text(url).await?;
        parse_body(&body)
    }

    /// Fetches a single page of contributions matching the query.
    pub async fn get_contributions(&self, query: &ContributionQuery) -> Result<PageResponse, Error> {
        let url = self.contributions_url(query)?;
        self.get_json(&url).await
    }
}

/// Parses a JSON body, logging a truncated copy on failure.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str::<T>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::ParseFailed(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

/// Copy of `url` with the `api_key` value masked, for logging.
fn redact(url: &Url) -> Url {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    if !pairs.is_empty() {
        out.query_pairs_mut().clear().extend_pairs(pairs);
    }
    out
}
