use clap::Parser;
use gsc_check::config::credentials::default_key_paths;
use gsc_check::utils::logger;
use gsc_check::CheckConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CheckConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut stdout = std::io::stdout();
    let exit_code = gsc_check::run(&config, &default_key_paths(), &mut stdout).await;

    tracing::debug!("Exiting with code {}", exit_code);
    std::process::exit(exit_code);
}
