//! `dnsblcheck domain` - check a domain name against the lists.

use std::process::ExitCode;

use anyhow::Result;
use dnsbl_core::Target;

use super::{check, Context};
use crate::cli::args::DomainArgs;

pub async fn execute(ctx: Context, args: DomainArgs) -> Result<ExitCode> {
    // Fail fast on a malformed name: no DNS work is dispatched.
    let target = Target::domain(&args.domain)?;
    check::run(ctx, target).await
}
