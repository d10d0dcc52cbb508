//! # seclevel
//!
//! Raise the zone security level, never lower it unless forced.
//!
//! stdout carries exactly one status line; logs go to stderr.

use clap::Parser;
use seclevel::cli::{self, Cli};
use seclevel::config::EnvSecrets;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli::run(&cli, &EnvSecrets).await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "run failed");
            println!("{}", cli::render_error(&err, cli.json));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "seclevel=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
