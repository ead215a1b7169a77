//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// All-in-one DNSBL checker using every publicly known DNSBL
///
/// Checks an IPv4 address or a domain name against the built-in table of
/// DNS blacklists and whitelists, and exits non-zero when a blacklist
/// reports the target as listed.
#[derive(Parser, Debug)]
#[command(name = "dnsblcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Check whitelists instead of blacklists
    #[arg(long, global = true)]
    pub whitelist: bool,

    /// More verbose output: include misses, timeouts and failures
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// DNSBL zone to exclude from the check (repeatable)
    #[arg(long, global = true, value_name = "ZONE")]
    pub exclude: Vec<String>,

    /// Number of checks per second
    #[arg(
        long,
        global = true,
        default_value_t = 20,
        value_name = "QPS",
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    pub rate: u32,

    /// Number of concurrent workers
    #[arg(
        long,
        global = true,
        default_value_t = 8,
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..=1000)
    )]
    pub workers: u16,

    /// Per-query timeout in seconds
    #[arg(long, global = true, default_value_t = 5, value_name = "SECS")]
    pub timeout: u64,

    /// Skip the RFC 5782 health check before trusting each list
    #[arg(long, global = true)]
    pub no_health_check: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an IPv4 address against the lists
    Ip(IpArgs),

    /// Check a domain name against the lists
    Domain(DomainArgs),
}

#[derive(Args, Debug)]
pub struct IpArgs {
    /// IPv4 address to check
    pub ip: String,
}

#[derive(Args, Debug)]
pub struct DomainArgs {
    /// Domain name to check
    pub domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ip_subcommand_with_defaults() {
        let cli = Cli::parse_from(["dnsblcheck", "ip", "8.8.8.8"]);
        assert_eq!(cli.rate, 20);
        assert_eq!(cli.workers, 8);
        assert!(!cli.whitelist);
        assert!(!cli.no_health_check);
        assert!(matches!(cli.command, Commands::Ip(args) if args.ip == "8.8.8.8"));
    }

    #[test]
    fn exclude_is_repeatable() {
        let cli = Cli::parse_from([
            "dnsblcheck",
            "--exclude",
            "bl.example.org",
            "--exclude",
            "bl2.example.org",
            "domain",
            "example.com",
        ]);
        assert_eq!(cli.exclude.len(), 2);
    }

    #[test]
    fn rejects_out_of_range_rate() {
        assert!(Cli::try_parse_from(["dnsblcheck", "--rate", "0", "ip", "8.8.8.8"]).is_err());
        assert!(Cli::try_parse_from(["dnsblcheck", "--rate", "1001", "ip", "8.8.8.8"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_workers() {
        assert!(Cli::try_parse_from(["dnsblcheck", "--workers", "0", "ip", "8.8.8.8"]).is_err());
    }
}
