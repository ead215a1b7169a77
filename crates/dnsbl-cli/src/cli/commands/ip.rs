//! `dnsblcheck ip` - check an IPv4 address against the lists.

use std::process::ExitCode;

use anyhow::Result;
use dnsbl_core::Target;

use super::{check, Context};
use crate::cli::args::IpArgs;

pub async fn execute(ctx: Context, args: IpArgs) -> Result<ExitCode> {
    // Fail fast on a malformed address: no DNS work is dispatched.
    let target = Target::ip(&args.ip)?;
    check::run(ctx, target).await
}
