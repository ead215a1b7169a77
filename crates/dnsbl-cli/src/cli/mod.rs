//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use dnsbl_core::ListMode;
use tracing_subscriber::EnvFilter;

/// Run the CLI application and return the process exit code.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.whitelist {
        ListMode::Whitelist
    } else {
        ListMode::Blacklist
    };

    // Everything a command needs, gathered once; no ambient state below
    // this point.
    let ctx = commands::Context {
        mode,
        verbose: cli.verbose,
        exclude: cli.exclude,
        workers: usize::from(cli.workers),
        rate: cli.rate,
        query_timeout: Duration::from_secs(cli.timeout),
        health_check: !cli.no_health_check,
        output: cli.output,
    };

    match cli.command {
        Commands::Ip(args) => commands::ip::execute(ctx, args).await,
        Commands::Domain(args) => commands::domain::execute(ctx, args).await,
    }
}
