use breed_lookup::utils::logger;
use breed_lookup::{run_cli, CatalogConfig};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::init_cli_logger();

    let mut stdout = std::io::stdout().lock();
    let code = run_cli(std::env::args_os(), CatalogConfig::default(), &mut stdout).await;

    ExitCode::from(code)
}
