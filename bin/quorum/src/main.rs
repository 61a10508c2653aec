use std::process::ExitCode;

use clap::Parser;
use quorum::{cli::Cli, commands};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 | 1 => "error",
        2 => "warn",
        3 => "info",
        4 => "debug",
        _ => "trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set the default log level from `--verbosity` if RUST_LOG is not set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", log_level(cli.verbosity));
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match commands::run(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
