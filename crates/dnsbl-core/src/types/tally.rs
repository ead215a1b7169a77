use serde::Serialize;

use crate::types::{ListMode, Outcome};

/// Running aggregate of classified outcomes for one invocation.
///
/// Invariant: `checks` equals the sum of all category counters — every
/// dispatched work unit lands in exactly one bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Total work units that produced an outcome
    pub checks: u64,
    /// Lists reporting the target as listed
    pub hits: u64,
    /// Lists answering name-not-found
    pub misses: u64,
    /// Queries that timed out
    pub timeouts: u64,
    /// Lookups failing for other reasons
    pub failures: u64,
    /// Lists skipped because they failed the health check
    pub health_failures: u64,
}

impl Tally {
    /// Count one outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        self.checks += 1;
        match outcome {
            Outcome::Hit => self.hits += 1,
            Outcome::Miss => self.misses += 1,
            Outcome::Timeout => self.timeouts += 1,
            Outcome::Failure(_) => self.failures += 1,
            Outcome::HealthCheckFailed(_) => self.health_failures += 1,
        }
    }

    /// Conservation check: no outcome lost, none double-counted.
    #[must_use]
    pub const fn is_conserved(&self) -> bool {
        self.checks
            == self.hits + self.misses + self.timeouts + self.failures + self.health_failures
    }
}

/// Final pass/fail status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// No blacklist hit (always the case for whitelist runs)
    Clean,
    /// At least one blacklist reported the target as listed
    Listed,
}

impl RunStatus {
    /// Derive the final status from the mode and the finished tally.
    /// Whitelist hits are informational and never fail a run.
    #[must_use]
    pub const fn from_tally(mode: ListMode, tally: &Tally) -> Self {
        match mode {
            ListMode::Blacklist if tally.hits > 0 => Self::Listed,
            _ => Self::Clean,
        }
    }

    /// Process exit status this run maps to. Only the outermost CLI layer
    /// may actually terminate the process with it.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Listed => 2,
        }
    }
}

/// What a finished run hands back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Final counters
    pub tally: Tally,
    /// Final pass/fail status
    pub status: RunStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FailureKind, HealthVerdict};

    #[test]
    fn records_every_category_once() {
        let mut tally = Tally::default();
        tally.record(&Outcome::Hit);
        tally.record(&Outcome::Miss);
        tally.record(&Outcome::Miss);
        tally.record(&Outcome::Timeout);
        tally.record(&Outcome::Failure(FailureKind::Resolver("boom".into())));
        tally.record(&Outcome::HealthCheckFailed(HealthVerdict::FailsBothTests));

        assert_eq!(tally.checks, 6);
        assert_eq!(tally.hits, 1);
        assert_eq!(tally.misses, 2);
        assert_eq!(tally.timeouts, 1);
        assert_eq!(tally.failures, 1);
        assert_eq!(tally.health_failures, 1);
        assert!(tally.is_conserved());
    }

    #[test]
    fn blacklist_hit_means_listed() {
        let mut tally = Tally::default();
        tally.record(&Outcome::Hit);

        let status = RunStatus::from_tally(ListMode::Blacklist, &tally);
        assert_eq!(status, RunStatus::Listed);
        assert_eq!(status.exit_code(), 2);
    }

    #[test]
    fn blacklist_without_hits_is_clean() {
        let mut tally = Tally::default();
        tally.record(&Outcome::Miss);
        tally.record(&Outcome::Failure(FailureKind::Resolver("boom".into())));

        let status = RunStatus::from_tally(ListMode::Blacklist, &tally);
        assert_eq!(status, RunStatus::Clean);
        assert_eq!(status.exit_code(), 0);
    }

    #[test]
    fn whitelist_hits_stay_clean() {
        let mut tally = Tally::default();
        tally.record(&Outcome::Hit);

        let status = RunStatus::from_tally(ListMode::Whitelist, &tally);
        assert_eq!(status, RunStatus::Clean);
    }
}
