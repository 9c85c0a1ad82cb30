use serde::{Deserialize, Serialize};

/// Pagination block returned with every OpenFEC page.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pagination {
    /// Total number of pages for the query. Required.
    pub pages: u32,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
}

/// Minimal view of a page: only the page count is required.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageCount {
    pub pagination: Pagination,
}

/// One page of results. Records are passed through untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageResponse {
    pub pagination: Pagination,
    pub results: Vec<serde_json::Value>,
}
