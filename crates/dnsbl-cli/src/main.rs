//! dnsblcheck - all-in-one DNSBL checker.
//!
//! Checks an IPv4 address or domain name against every publicly known
//! DNSBL/DNSWL.

use std::process::ExitCode;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dnsbl_cli::run().await
}
