use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::filter::FilterSelection;
use crate::domain::entities::pagination::PaginatedResult;
use crate::domain::entities::record::CountrySummary;
use crate::usecase::ports::api::{ApiError, CaseDataApi, PageQuery};

/// Typed front for the three dashboard reads.
///
/// Country and summary lookups degrade to empty lists. Page fetches hand the
/// error back so the caller decides on the fallback and can remember that
/// the request failed.
#[derive(Clone)]
pub struct QueryService {
    api: Arc<dyn CaseDataApi>,
    per_page: Option<u32>,
}

impl QueryService {
    pub fn new(api: Arc<dyn CaseDataApi>) -> Self {
        Self {
            api,
            per_page: None,
        }
    }

    pub fn with_per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page;
        self
    }

    pub async fn list_countries(&self) -> Vec<String> {
        match self.api.list_countries().await {
            Ok(countries) => countries,
            Err(err) => {
                warn!(error = %err, "failed to load countries");
                Vec::new()
            }
        }
    }

    pub async fn fetch_page(
        &self,
        page: u32,
        filter: &FilterSelection,
    ) -> Result<PaginatedResult, ApiError> {
        let query = PageQuery::new(page, filter.clone()).with_per_page(self.per_page);
        debug!(page = query.page, filter = %query.filter, "fetching page");
        self.api
            .fetch_page(query)
            .await
            .inspect_err(|err| warn!(error = %err, page, filter = %filter, "failed to load page"))
    }

    pub async fn fetch_country_summary(&self) -> Vec<CountrySummary> {
        match self.api.fetch_country_summary().await {
            Ok(summary) => summary,
            Err(err) => {
                warn!(error = %err, "failed to load country summary");
                Vec::new()
            }
        }
    }
}
