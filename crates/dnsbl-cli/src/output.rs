//! Output formatting: per-list result lines, the terminal summary, and the
//! JSON report.

use clap::ValueEnum;
use colored::Colorize;
use dnsbl_core::{Outcome, RunReport, Target};
use dnsbl_engine::CheckEvent;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per list as results arrive, plus a summary
    #[default]
    Text,
    /// The full run report as JSON, printed on completion
    Json,
}

/// Print one per-list result line.
///
/// Hits are always printed; every other classification only in verbose
/// mode.
pub fn print_event(event: &CheckEvent, verbose: bool) {
    if !verbose && !matches!(event.outcome, Outcome::Hit) {
        return;
    }
    println!("{} : {}", event.zone, colorize(&event.outcome));
}

fn colorize(outcome: &Outcome) -> colored::ColoredString {
    let token = outcome.token();
    match outcome {
        Outcome::Hit => token.red().bold(),
        Outcome::Miss => token.green(),
        Outcome::Timeout => token.yellow(),
        Outcome::Failure(_) | Outcome::HealthCheckFailed(_) => token.magenta(),
    }
}

/// Print the terminal summary line.
pub fn print_summary(report: &RunReport) {
    let t = &report.tally;
    println!("------------------------------------------------");
    println!(
        "Result: {} checks performed. {} hits, {} misses, {} timeouts, {} failures, {} untrusted lists",
        t.checks, t.hits, t.misses, t.timeouts, t.failures, t.health_failures
    );
}

/// Print the whole run as a JSON document.
pub fn print_json(
    target: &Target,
    report: &RunReport,
    results: &[CheckEvent],
) -> anyhow::Result<()> {
    let doc = serde_json::json!({
        "target": target,
        "status": report.status,
        "tally": report.tally,
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
