//! sacp-check
//!
//! `sacp-check [--config <path>] <tenant> <profiles|-> <Class#method>`
//! - exit 0 allow, 1 deny or resolution failure, 2 usage/config error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sacp_policy::cli::{self, Cli};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap exits with 2 on usage errors, 0 on --help/--version
    let args = Cli::parse();

    match cli::run(&args) {
        Ok(outcome) => {
            println!("{}", outcome.report);
            ExitCode::from(outcome.exit_code)
        }
        Err(e) => {
            eprintln!("config load failed ({}): {e}", args.config.display());
            ExitCode::from(cli::EXIT_USAGE)
        }
    }
}
