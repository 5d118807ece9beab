#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::parse_http_url;
use url::Url;

pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://api.thecatapi.com/v1/breeds";

/// Where the breed catalog lives. The binary always uses the default; library
/// callers and tests may point it elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub endpoint: String,
}

impl CatalogConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        parse_http_url("endpoint", &self.endpoint)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_ENDPOINT)
    }
}
