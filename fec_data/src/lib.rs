//! Data layer over the OpenFEC client: input normalization, form intake,
//! environment configuration, and whole-result-set pagination.
//!
//! Raw user input goes through [`normalize`] (never fails, may warn), becomes
//! a [`ContributionQuery`], and [`DataFetcher`] walks every page of it.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod form;
pub mod normalize;

pub use fec_api;
pub use fec_api::types;
pub use fec_api::{Client, ContributionQuery, Query};

pub use config::FetchConfig;
pub use error::FecDataError;
pub use fetcher::{DataFetcher, FetchOptions, StartingUrl};
pub use form::SearchForm;
pub use normalize::{normalize_committee_type, normalize_two_year_period, InputWarning, Normalized};
