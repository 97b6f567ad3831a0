//! stsenv - Export temporary AWS credentials from a JSON payload.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stsenv::cli::output;
use stsenv::cli::{execute, Cli};
use stsenv::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stsenv=debug")
        } else {
            EnvFilter::new("stsenv=warn")
        }
    });

    // Logs go to stderr so `--print` output stays evaluable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e.to_string());
            if let Some(hint) = e.hint() {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}
