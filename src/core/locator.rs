use crate::core::{BreedRecord, CatalogSource};
use crate::utils::error::Result;

pub struct BreedLocator<S: CatalogSource> {
    source: S,
}

impl<S: CatalogSource> BreedLocator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches the catalog and returns the first breed named exactly `name`.
    ///
    /// `Ok(None)` means the fetch worked but nothing matched. Fetch errors are
    /// returned as-is.
    pub async fn find_breed_info(&self, name: &str) -> Result<Option<BreedRecord>> {
        let breeds = self.source.get_breeds_info().await?;
        let found = breeds.into_iter().find(|breed| breed.name == name);

        match &found {
            Some(_) => tracing::info!("Found breed {:?}", name),
            None => tracing::info!("No breed named {:?} in catalog", name),
        }

        Ok(found)
    }
}
