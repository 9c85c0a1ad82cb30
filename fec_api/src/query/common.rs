//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination and the API key.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed). Zero is treated as page 1.
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page.max(1);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = Some(per_page);
        self
    }

    /// Sets the key forwarded as `api_key`.
    fn with_api_key(mut self, api_key: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().api_key = Some(api_key.to_string());
        self
    }
}

/// Fields shared by all query types: API key and pagination.
#[derive(Clone, Debug)]
pub struct QueryCommon {
    /// OpenFEC API key. `None` omits the parameter.
    pub api_key: Option<String>,
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
    /// Results per page. `None` uses the API default.
    pub per_page: Option<u32>,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            api_key: None,
            page: 1,
            per_page: None,
        }
    }
}

impl QueryCommon {
    /// Appends the API key and pagination parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(api_key) = &self.api_key {
            url.query_pairs_mut().append_pair("api_key", api_key);
        };
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        if let Some(per_page) = self.per_page {
            url.query_pairs_mut()
                .append_pair("per_page", &per_page.to_string());
        };
        url
    }
}
