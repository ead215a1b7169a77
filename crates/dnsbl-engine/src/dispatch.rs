//! Worker pool, dispatch and aggregation.
//!
//! One work unit is created per filtered list entry. A fixed pool of
//! interchangeable workers claims units from a shared queue until it is
//! exhausted; each unit runs the optional health check, takes a
//! rate-limiter slot, executes the lookup and publishes exactly one
//! classified outcome. The dispatcher aggregates outcomes into the tally
//! while forwarding them to the caller for live reporting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dnsbl_core::{ListEntry, ListMode, Outcome, RunReport, RunStatus, Tally, Target};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::health::HealthVerifier;
use crate::limiter::QueryLimiter;
use crate::resolver::Resolve;
use crate::strategy;

/// Smallest accepted worker-pool size.
pub const MIN_WORKERS: usize = 1;
/// Largest accepted worker-pool size.
pub const MAX_WORKERS: usize = 1000;

/// Immutable per-run engine configuration.
///
/// Built once by the caller and passed into the dispatcher; workers never
/// read ambient state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Worker-pool size, clamped to [`MIN_WORKERS`]..=[`MAX_WORKERS`]
    pub workers: usize,
    /// Aggregate outbound query rate
    pub queries_per_second: u32,
    /// Hard deadline per DNS query
    pub query_timeout: Duration,
    /// Verify each list per RFC 5782 before trusting its answer
    pub health_check: bool,
    /// Blacklist or whitelist semantics for the final status
    pub mode: ListMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: 8,
            queries_per_second: 20,
            query_timeout: Duration::from_secs(5),
            health_check: true,
            mode: ListMode::Blacklist,
        }
    }
}

/// One (target, list) check, consumed by exactly one worker.
struct WorkUnit {
    target: Target,
    entry: ListEntry,
}

/// A classified outcome as published to the caller, in completion order.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent {
    /// Zone hostname of the checked list
    pub zone: String,
    /// Terminal classification for this list
    pub outcome: Outcome,
}

/// Drives one invocation: enqueue, drain, aggregate.
pub struct Dispatcher {
    config: EngineConfig,
    resolver: Arc<dyn Resolve>,
}

impl Dispatcher {
    /// Create a dispatcher over the given resolver.
    #[must_use]
    pub fn new(config: EngineConfig, resolver: Arc<dyn Resolve>) -> Self {
        Self { config, resolver }
    }

    /// Check `target` against every entry, publishing each outcome on
    /// `events` as it completes, and return the finished report.
    ///
    /// Every entry yields exactly one outcome; a broken list is recorded
    /// and the rest keep going. The returned tally satisfies the
    /// conservation invariant.
    pub async fn run(
        &self,
        target: &Target,
        entries: Vec<ListEntry>,
        events: mpsc::UnboundedSender<CheckEvent>,
    ) -> RunReport {
        let limiter = Arc::new(QueryLimiter::new(self.config.queries_per_second));
        let units: Arc<Vec<WorkUnit>> = Arc::new(
            entries
                .into_iter()
                .map(|entry| WorkUnit {
                    target: target.clone(),
                    entry,
                })
                .collect(),
        );
        // Workers claim the next unclaimed index; once it runs past the
        // end the queue is drained and the worker exits.
        let next = Arc::new(AtomicUsize::new(0));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let workers = self
            .config
            .workers
            .clamp(MIN_WORKERS, MAX_WORKERS)
            .min(units.len())
            .max(MIN_WORKERS);
        debug!(workers, units = units.len(), "dispatching");

        let mut pool = JoinSet::new();
        for worker in 0..workers {
            let units = Arc::clone(&units);
            let next = Arc::clone(&next);
            let resolver = Arc::clone(&self.resolver);
            let limiter = Arc::clone(&limiter);
            let config = self.config.clone();
            let tx = tx.clone();
            pool.spawn(async move {
                worker_loop(worker, &units, &next, &*resolver, &limiter, &config, &tx).await;
            });
        }
        drop(tx);

        // Single-consumer aggregation: each published outcome is counted
        // exactly once, in whatever order workers finish.
        let mut tally = Tally::default();
        while let Some(event) = rx.recv().await {
            tally.record(&event.outcome);
            let _ = events.send(event);
        }

        while pool.join_next().await.is_some() {}

        let status = RunStatus::from_tally(self.config.mode, &tally);
        RunReport { tally, status }
    }
}

async fn worker_loop(
    worker: usize,
    units: &[WorkUnit],
    next: &AtomicUsize,
    resolver: &dyn Resolve,
    limiter: &QueryLimiter,
    config: &EngineConfig,
    tx: &mpsc::UnboundedSender<CheckEvent>,
) {
    loop {
        let index = next.fetch_add(1, Ordering::Relaxed);
        let Some(unit) = units.get(index) else { break };

        let outcome = execute_unit(unit, resolver, limiter, config).await;
        match &outcome {
            Outcome::Hit => debug!(worker, zone = %unit.entry.address, "hit"),
            Outcome::Failure(detail) => {
                warn!(worker, zone = %unit.entry.address, %detail, "lookup failed");
            }
            Outcome::HealthCheckFailed(verdict) => {
                warn!(
                    worker,
                    zone = %unit.entry.address,
                    verdict = verdict.label(),
                    "list failed health check, skipping lookup"
                );
            }
            Outcome::Miss | Outcome::Timeout => {}
        }

        // The receiver outlives all workers; a send can only fail after
        // the run was abandoned, in which case the outcome is moot.
        let _ = tx.send(CheckEvent {
            zone: unit.entry.address.clone(),
            outcome,
        });
    }
}

async fn execute_unit(
    unit: &WorkUnit,
    resolver: &dyn Resolve,
    limiter: &QueryLimiter,
    config: &EngineConfig,
) -> Outcome {
    if config.health_check {
        let verdict = HealthVerifier::new(resolver, limiter)
            .verify(&unit.target, &unit.entry.address)
            .await;
        if !verdict.is_healthy() {
            // Never degrade an untrusted list to Miss.
            return Outcome::HealthCheckFailed(verdict);
        }
    }

    limiter.acquire().await;
    strategy::run_lookup(resolver, &unit.target, &unit.entry).await
}
