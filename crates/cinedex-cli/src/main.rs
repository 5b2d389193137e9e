mod cli;
mod commands;

use std::process::ExitCode;

use cinedex_core::CinedexConfig;
use cinedex_core::config::DEFAULT_LOG_FILTER;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CinedexConfig::from_env().with_catalog_override(cli.catalog.clone());
    init_tracing(&config.log_filter);

    let operation = cli.command.operation();
    match commands::run(&config, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::report_failure(operation, &err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
