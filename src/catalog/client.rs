//! reqwestによるカタログAPIクライアント

use super::CatalogSource;
use crate::error::{CatalogError, Result};
use series_catalog_common::{FetchRequest, Show};
use std::time::Duration;

const USER_AGENT: &str = concat!("series-catalog/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_shows(&self, request: &FetchRequest) -> Result<Vec<Show>> {
        tracing::debug!(url = %request.url, generation = request.generation, "fetching shows");

        let response = self.http.get(&request.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let shows: Vec<Show> = serde_json::from_str(&body)?;
        tracing::debug!(count = shows.len(), page = %request.page, "received shows");
        Ok(shows)
    }
}
