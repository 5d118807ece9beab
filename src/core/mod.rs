pub mod driver;
pub mod locator;
pub mod presenter;

pub use crate::domain::model::{BreedList, BreedRecord, Weight};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
