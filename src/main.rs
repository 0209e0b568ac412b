use clap::Parser;
use mioa::app::{handle_fatal_error, init_logging, AppConfig};
use mioa::cli::{execute_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = match AppConfig::new(verbose) {
        Ok(config) => config.with_config_path(cli.config),
        Err(e) => handle_fatal_error(e, verbose),
    };

    init_logging(&config);

    if let Err(e) = execute_command(cli.command, &config).await {
        handle_fatal_error(e, verbose);
    }
}
