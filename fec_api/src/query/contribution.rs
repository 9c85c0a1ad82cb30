use url::Url;

use crate::types::{CommitteeType, TwoYearPeriod};

use super::{common::QueryCommon, Query};

/// Query against the itemized contributions search (`/schedules/schedule_a/`).
///
/// Cycle and committee type are always sent. Free-text location filters are
/// forwarded as given and skipped when blank.
#[derive(Clone, Debug, Default)]
pub struct ContributionQuery {
    pub common: QueryCommon,
    pub cycle: TwoYearPeriod,
    pub committee_type: CommitteeType,
    pub location: Option<String>,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Query for ContributionQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("two_year_transaction_period", &self.cycle.to_string());
        url.query_pairs_mut()
            .append_pair("recipient_committee_type", self.committee_type.code());

        let filters = [
            ("contributor_street_1", &self.location),
            ("contributor_city", &self.locality),
            ("contributor_state", &self.administrative_area),
            ("contributor_zip", &self.postal_code),
            ("contributor_country", &self.country),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                url.query_pairs_mut().append_pair(key, value);
            }
        }

        url
    }
}

impl ContributionQuery {
    pub fn with_cycle(mut self, cycle: TwoYearPeriod) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn with_committee_type(mut self, committee_type: CommitteeType) -> Self {
        self.committee_type = committee_type;
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_locality(mut self, locality: &str) -> Self {
        self.locality = Some(locality.to_string());
        self
    }

    /// State or province (Google's `administrative_area_level_1`).
    pub fn with_administrative_area(mut self, area: &str) -> Self {
        self.administrative_area = Some(area.to_string());
        self
    }

    pub fn with_postal_code(mut self, postal_code: &str) -> Self {
        self.postal_code = Some(postal_code.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }
}
