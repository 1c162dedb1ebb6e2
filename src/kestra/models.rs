//! Models shared across Kestra resources

use serde::Deserialize;

/// Paged search results as returned by Kestra search endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PagedResults<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total: u64,
}
