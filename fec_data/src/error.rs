//! Error types for the data layer.

use thiserror::Error;

/// Errors from fetching and aggregating OpenFEC pages.
///
/// Bad user input is not an error here: it is coerced to a default and
/// reported as an [`InputWarning`](crate::InputWarning).
#[derive(Error, Debug)]
pub enum FecDataError {
    /// Transport, HTTP status, or body parsing failure from the API client.
    #[error("API error: {0}")]
    Api(#[from] fec_api::Error),
}
