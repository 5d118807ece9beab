use clap::Parser;
use std::ffi::OsString;

#[derive(Debug, Clone, Parser)]
#[command(name = "breed-lookup")]
#[command(about = "Look up a cat breed profile by its exact name")]
pub struct CliArgs {
    #[arg(help = "Exact, case-sensitive breed name (e.g. \"Siamese\")")]
    pub breed: String,
}

/// Parses `argv` (program name first). Usage errors come back as `clap::Error`
/// so the caller decides how to print them and which status to exit with.
pub fn parse_args<I, T>(argv: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(argv)
}
