//! Environment-driven settings for the fetcher.

use std::time::Duration;

use fec_api::{Client, DEFAULT_BASE_URL};

use crate::error::FecDataError;
use crate::fetcher::{DataFetcher, FetchOptions};

/// OpenFEC's shared demonstration key; heavily rate limited.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Settings read from `FEC_*` environment variables.
///
/// Unset or unparseable values fall back to defaults rather than failing.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_key: String,
    pub base_url: String,
    pub per_page: Option<u32>,
    pub max_pages: Option<u32>,
    pub request_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: None,
            max_pages: None,
            request_delay: Duration::ZERO,
        }
    }
}

impl FetchConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let positive = |key: &str| {
            non_empty(key)
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
        };

        Self {
            api_key: non_empty("FEC_API_KEY").unwrap_or(defaults.api_key),
            base_url: non_empty("FEC_BASE_URL").unwrap_or(defaults.base_url),
            per_page: positive("FEC_PER_PAGE"),
            max_pages: positive("FEC_MAX_PAGES"),
            request_delay: non_empty("FEC_REQUEST_DELAY_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_delay),
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            max_pages: self.max_pages,
            request_delay: self.request_delay,
        }
    }

    /// Builds a fetcher against the configured base URL.
    pub fn fetcher(&self) -> Result<DataFetcher, FecDataError> {
        let client = Client::with_base_url(&self.base_url)?;
        Ok(DataFetcher::with_options(client, self.fetch_options()))
    }
}
