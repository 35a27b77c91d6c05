use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::pagination::PaginatedResult;
use crate::domain::entities::record::CountrySummary;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub filter: FilterSelection,
    pub per_page: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, filter: FilterSelection) -> Self {
        Self {
            page: page.max(1),
            filter,
            per_page: None,
        }
    }

    pub fn with_per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page.filter(|value| *value > 0);
        self
    }

    /// `page` is always sent, `country` only for a concrete filter.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string())];
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(country) = self.filter.country() {
            pairs.push(("country", country.to_string()));
        }
        pairs
    }
}

/// Read-only access to the case dataset.
#[async_trait]
pub trait CaseDataApi: Send + Sync {
    async fn list_countries(&self) -> Result<Vec<String>, ApiError>;
    async fn fetch_page(&self, query: PageQuery) -> Result<PaginatedResult, ApiError>;
    async fn fetch_country_summary(&self) -> Result<Vec<CountrySummary>, ApiError>;
}
