use crate::core::locator::BreedLocator;
use crate::core::presenter::display_breed_profile;
use crate::core::CatalogSource;
use crate::utils::error::BreedError;
use std::io::Write;

#[cfg(feature = "cli")]
use crate::adapters::http::CatApiClient;
#[cfg(feature = "cli")]
use crate::config::{cli::parse_args, CatalogConfig};
#[cfg(feature = "cli")]
use std::ffi::OsString;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub const NOT_FOUND_MESSAGE: &str = "Breed not found";

/// Looks up `breed`, prints the outcome to `out` and returns the exit code.
///
/// A missing breed is a normal outcome (exit 0). Any lookup failure is
/// reported as `Error: <message>` with exit 1.
pub async fn run<S: CatalogSource, W: Write>(
    breed: &str,
    locator: &BreedLocator<S>,
    out: &mut W,
) -> u8 {
    let outcome = match locator.find_breed_info(breed).await {
        Ok(Some(record)) => display_breed_profile(&record, out),
        Ok(None) => writeln!(out, "{}", NOT_FOUND_MESSAGE).map_err(BreedError::from),
        Err(e) => {
            report_error(&e, out);
            return EXIT_FAILURE;
        }
    };

    match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, out);
            EXIT_FAILURE
        }
    }
}

/// Whole command-line flow: parse `argv`, then build the client and look up.
///
/// Usage errors are printed by clap and return its status (2) before any
/// client exists. The binary's exit code is this return value.
#[cfg(feature = "cli")]
pub async fn run_cli<I, T, W>(argv: I, config: CatalogConfig, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match parse_args(argv) {
        Ok(args) => args,
        Err(e) => {
            if let Err(io_err) = e.print() {
                tracing::debug!("Could not print usage: {}", io_err);
            }
            return u8::try_from(e.exit_code()).unwrap_or(EXIT_FAILURE);
        }
    };
    tracing::debug!("CLI args: {:?}", args);

    let client = match CatApiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            report_error(&e, out);
            return EXIT_FAILURE;
        }
    };
    tracing::debug!("Catalog endpoint: {}", client.endpoint());

    run(&args.breed, &BreedLocator::new(client), out).await
}

/// Errors belong on `out`; the log line stays below the default filter.
pub fn report_error<W: Write>(e: &BreedError, out: &mut W) {
    tracing::debug!("Lookup failed: {} (Category: {:?})", e, e.category());
    if let Err(io_err) = writeln!(out, "Error: {}", e) {
        tracing::debug!("Could not write error message: {}", io_err);
    }
}
