use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::entities::pagination::PaginatedResult;
use crate::domain::entities::record::CountrySummary;
use crate::usecase::ports::api::{ApiError, CaseDataApi, PageQuery};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";

const COUNTRIES_PATH: &str = "countries";
const DATA_PATH: &str = "data";
const SUMMARY_PATH: &str = "summary/by-country";

pub struct HttpCaseApi {
    client: Client,
    base_url: Url,
}

impl HttpCaseApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::InvalidUrl(format!("{}{path}: {err}", self.base_url)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| ApiError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|err| ApiError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

/// Base URLs are joined against, so a missing trailing slash would drop the
/// last path segment (`/api` + `data` -> `/data`).
pub fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|err| ApiError::InvalidUrl(format!("{trimmed}: {err}")))
}

#[async_trait]
impl CaseDataApi for HttpCaseApi {
    async fn list_countries(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(COUNTRIES_PATH)?;
        self.get_json(url).await
    }

    async fn fetch_page(&self, query: PageQuery) -> Result<PaginatedResult, ApiError> {
        let mut url = self.endpoint(DATA_PATH)?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());

        let mut result: PaginatedResult = self.get_json(url.clone()).await?;
        if !result.pagination.is_consistent() {
            warn!(%url, pagination = ?result.pagination, "server pagination out of range, normalizing");
            result.pagination = result.pagination.normalized();
        }
        Ok(result)
    }

    async fn fetch_country_summary(&self) -> Result<Vec<CountrySummary>, ApiError> {
        let url = self.endpoint(SUMMARY_PATH)?;
        self.get_json(url).await
    }
}
