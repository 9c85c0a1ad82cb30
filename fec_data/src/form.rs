//! Raw search-form fields as a web front end forwards them.

use fec_api::{ContributionQuery, Query};
use serde::Deserialize;

use crate::normalize::{normalize_committee_type, normalize_two_year_period, InputWarning};

/// Address-search form, field names as the page posts them.
///
/// Location fields are passed through as-is; only cycle and committee type
/// are coerced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    pub location: String,
    pub locality: String,
    pub administrative_area_level_1: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub cycle: Option<String>,
    #[serde(default)]
    pub committee_type: Option<String>,
}

impl SearchForm {
    /// Builds a page-1 query and returns any coercion warnings alongside it.
    ///
    /// A missing cycle or committee type takes the default without a warning.
    pub fn into_query(self, api_key: &str) -> (ContributionQuery, Vec<InputWarning>) {
        let mut warnings = Vec::new();
        let mut query = ContributionQuery::default().with_api_key(api_key);

        if let Some(cycle) = self.cycle {
            let (cycle, warning) = normalize_two_year_period(cycle).into_parts();
            warnings.extend(warning);
            query = query.with_cycle(cycle);
        }
        if let Some(committee_type) = self.committee_type {
            let (committee_type, warning) = normalize_committee_type(&committee_type).into_parts();
            warnings.extend(warning);
            query = query.with_committee_type(committee_type);
        }

        let query = query
            .with_location(&self.location)
            .with_locality(&self.locality)
            .with_administrative_area(&self.administrative_area_level_1)
            .with_postal_code(&self.postal_code)
            .with_country(&self.country);

        (query, warnings)
    }
}
