//! rqstrack: track RQS/POGG1 grant records from the command line.

use std::process::ExitCode;

use rqstrack_cli::{ReportPresenter, TablePresenter};
use rqstrack_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // RUST_LOG wins over --verbose; logs go to stderr so stdout stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level().as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            TablePresenter::new(config.verbose, config.quiet).present_error(&format!("{err:#}"));
            let code = u8::try_from(errors::exit_code(&err)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
