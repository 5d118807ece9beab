pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{parse_args, CliArgs};
#[cfg(feature = "cli")]
pub use crate::core::driver::run_cli;

pub use crate::adapters::http::CatApiClient;
pub use crate::config::CatalogConfig;
pub use crate::core::{driver::run, locator::BreedLocator, presenter::display_breed_profile};
pub use crate::domain::model::{BreedList, BreedRecord, Weight};
pub use crate::utils::error::{BreedError, Result};
