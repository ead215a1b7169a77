//! Command implementations.

pub mod check;
pub mod domain;
pub mod ip;

use std::time::Duration;

use dnsbl_core::ListMode;
use dnsbl_engine::EngineConfig;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Check blacklists or whitelists
    pub mode: ListMode,

    /// Print misses, timeouts and failures, not just hits
    pub verbose: bool,

    /// Zones excluded from the check
    pub exclude: Vec<String>,

    /// Worker-pool size
    pub workers: usize,

    /// Queries per second
    pub rate: u32,

    /// Per-query deadline
    pub query_timeout: Duration,

    /// Verify each list per RFC 5782 before trusting it
    pub health_check: bool,

    /// Output format
    pub output: OutputFormat,
}

impl Context {
    /// Build the engine configuration this context describes.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            workers: self.workers,
            queries_per_second: self.rate,
            query_timeout: self.query_timeout,
            health_check: self.health_check,
            mode: self.mode,
        }
    }
}
