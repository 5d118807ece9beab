use crate::domain::model::BreedList;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can hand back the full breed catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn get_breeds_info(&self) -> Result<BreedList>;
}
