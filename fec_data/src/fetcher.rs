//! Whole-result-set pagination over the contributions search.

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use fec_api::types::{PageCount, PageResponse};
use fec_api::{Client, ContributionQuery, Query};
use serde_json::Value;
use tokio::time::Instant;
use url::Url;

use crate::error::FecDataError;

/// The fully-formed page-1 URL of a query.
///
/// Page counts are only ever read through this type, so a URL has to be
/// built (usually by [`DataFetcher::starting_url`]) before it can be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingUrl(Url);

impl StartingUrl {
    pub fn new(url: Url) -> Self {
        StartingUrl(url)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for StartingUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Limits applied while walking pages.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Stop after this many pages. `None` walks every page the API reports.
    pub max_pages: Option<u32>,
    /// Minimum spacing between consecutive requests.
    pub request_delay: Duration,
}

/// Sequential page walker over an OpenFEC [`Client`].
///
/// Requests are issued one at a time, in page order. There is no retry: the
/// first failed page aborts the whole aggregation.
pub struct DataFetcher {
    client: Client,
    options: FetchOptions,
    /// When the last HTTP request was sent, for pacing.
    last_request: Mutex<Option<Instant>>,
}

impl DataFetcher {
    pub fn new(client: Client) -> Self {
        Self::with_options(client, FetchOptions::default())
    }

    pub fn with_options(client: Client, options: FetchOptions) -> Self {
        Self {
            client,
            options,
            last_request: Mutex::new(None),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Builds the page-1 URL for `query`, whatever page the query is set to.
    pub fn starting_url(&self, query: &ContributionQuery) -> Result<StartingUrl, FecDataError> {
        let url = self.client.contributions_url(&query.clone().with_page(1))?;
        Ok(StartingUrl::new(url))
    }

    async fn pace(&self) {
        let delay = self.options.request_delay;
        let sleep_dur = {
            let last = *self.last_request.lock().unwrap_or_else(|e| e.into_inner());
            last.and_then(|last_time| delay.checked_sub(last_time.elapsed()))
                .filter(|d| !d.is_zero())
        };
        if let Some(dur) = sleep_dur {
            tokio::time::sleep(dur).await;
        }
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
    }

    /// Reads `pagination.pages` from the first page of a query.
    ///
    /// Only a [`StartingUrl`] is accepted; a bare string does not compile:
    ///
    /// ```compile_fail
    /// # async fn demo(fetcher: &fec_data::DataFetcher) {
    /// let pages = fetcher.total_pages_for_call("www.google.com").await;
    /// # }
    /// ```
    ///
    /// Malformed JSON or a missing `pagination.pages` is a parse error;
    /// network failures and non-2xx statuses propagate as-is.
    pub async fn total_pages_for_call(&self, starting_url: &StartingUrl) -> Result<u32, FecDataError> {
        self.pace().await;
        let count: PageCount = self.client.get_json(starting_url.as_url()).await?;
        tracing::debug!("{} reports {} pages", starting_url.as_url().path(), count.pagination.pages);
        Ok(count.pagination.pages)
    }

    /// Fetches pages `1..=N` of `query` and concatenates their results.
    ///
    /// `N` is read once from `starting_url` and trusted for the rest of the
    /// walk. Results keep the API's order within a page and page order across
    /// pages.
    pub async fn fetch_all_pages(
        &self,
        starting_url: &StartingUrl,
        query: &ContributionQuery,
    ) -> Result<Vec<Value>, FecDataError> {
        let total_pages = self.total_pages_for_call(starting_url).await?;
        let last_page = match self.options.max_pages {
            Some(cap) if cap < total_pages => {
                tracing::info!("Stopping at page {} of {}", cap, total_pages);
                cap
            }
            _ => total_pages,
        };

        let mut results = Vec::new();
        for page in 1..=last_page {
            let url = self.client.contributions_url(&query.clone().with_page(page))?;
            self.pace().await;
            let body: PageResponse = self.client.get_json(&url).await.map_err(|e| {
                tracing::error!("Page {}/{} failed: {}", page, last_page, e);
                e
            })?;
            tracing::debug!("Page {}/{}: {} results", page, last_page, body.results.len());
            results.extend(body.results);
        }

        tracing::info!("Fetched {} results across {} pages", results.len(), last_page);
        Ok(results)
    }

    /// Builds the starting URL for `query` and fetches every page of it.
    pub async fn fetch_all(&self, query: &ContributionQuery) -> Result<Vec<Value>, FecDataError> {
        let starting_url = self.starting_url(query)?;
        self.fetch_all_pages(&starting_url, query).await
    }
}
