//! Shared check flow for the `ip` and `domain` commands.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use dnsbl_core::{filter_entries, Target};
use dnsbl_engine::{Dispatcher, SystemResolver};
use tokio::sync::mpsc;

use super::Context;
use crate::lists;
use crate::output::{self, OutputFormat};

/// Load the table, dispatch the run, stream results, map the exit code.
pub async fn run(ctx: Context, target: Target) -> Result<ExitCode> {
    let entries = lists::load_builtin()?;
    let filtered = filter_entries(&entries, &target, ctx.mode, &ctx.exclude);

    let config = ctx.engine_config();
    let resolver = Arc::new(SystemResolver::new(config.query_timeout));
    let dispatcher = Dispatcher::new(config, resolver);

    // Print result lines as workers publish them; collect everything for
    // the JSON report.
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let verbose = ctx.verbose;
    let live = ctx.output == OutputFormat::Text;
    let printer = tokio::spawn(async move {
        let mut results = Vec::new();
        while let Some(event) = events_rx.recv().await {
            if live {
                output::print_event(&event, verbose);
            }
            results.push(event);
        }
        results
    });

    let report = dispatcher.run(&target, filtered, events_tx).await;
    let results = printer.await?;

    match ctx.output {
        OutputFormat::Text => output::print_summary(&report),
        OutputFormat::Json => output::print_json(&target, &report, &results)?,
    }

    Ok(ExitCode::from(report.status.exit_code()))
}
