use crate::config::CatalogConfig;
use crate::domain::model::BreedList;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{BreedError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches the catalog over HTTP, one GET per call.
pub struct CatApiClient {
    endpoint: Url,
    client: Client,
}

impl CatApiClient {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for CatApiClient {
    async fn get_breeds_info(&self) -> Result<BreedList> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(BreedError::HttpStatusError {
                status,
                url: self.endpoint.to_string(),
            });
        }

        let body = response.bytes().await?;
        let breeds: BreedList = serde_json::from_slice(&body)?;
        tracing::debug!("Fetched {} breeds", breeds.len());

        Ok(breeds)
    }
}
