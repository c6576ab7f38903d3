//! pical: parallel midpoint-rule approximation of pi.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use pical_cli::CLIResultPresenter;
use pical_core::exit_codes;
use pical_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                return ExitCode::from(exit_codes::ERROR_GENERIC);
            }
        },
    };

    let presenter = CLIResultPresenter::new();
    match app::run(&config, &presenter) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => ExitCode::from(errors::handle_error(&err, &presenter)),
    }
}
