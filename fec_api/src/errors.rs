//! Error types for the API client.

/// Errors that can occur when making OpenFEC API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL or request path could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Network error")]
    Network(#[from] reqwest::Error),
    /// The API rejected the request with HTTP 429.
    #[error("Rate limited by OpenFEC API (HTTP 429)")]
    RateLimited,
    /// The API rejected the key with HTTP 403.
    #[error("Invalid API key (HTTP 403)")]
    InvalidApiKey,
    /// The API returned some other non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not valid JSON or lacked a required key.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
}
