use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

/// Terminal classification of one (target, list) check.
///
/// Every dispatched work unit produces exactly one of these; the aggregate
/// counters are derived from them and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The list answered: the target is listed
    Hit,
    /// Name-not-found: the expected negative answer
    Miss,
    /// The query timed out
    Timeout,
    /// The lookup failed for a reason other than not-found or timeout
    Failure(FailureKind),
    /// The list failed its RFC 5782 health check; its answer was never asked for
    HealthCheckFailed(HealthVerdict),
}

impl Outcome {
    /// The uppercase status token used in per-list output lines.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Timeout => "TIMEOUT",
            Self::Failure(_) => "FAILURE",
            Self::HealthCheckFailed(_) => "ERROR",
        }
    }
}

/// Why a lookup was classified as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// The list answered with an address outside 127.0.0.0/8, violating
    /// DNSBL convention; the answer cannot encode a listing
    WrongResponse(IpAddr),
    /// Any other resolver error (malformed response, server failure, ...)
    Resolver(String),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongResponse(addr) => write!(f, "answer {addr} outside 127.0.0.0/8"),
            Self::Resolver(msg) => f.write_str(msg),
        }
    }
}

/// Result of the RFC 5782 test-vector protocol for one list.
///
/// The full four-way verdict is kept rather than a collapsed healthy/broken
/// boolean, so callers can tell which canary misbehaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthVerdict {
    /// Both canaries answered as RFC 5782 requires
    Healthy,
    /// The known-positive canary was not reported as listed
    FailsPositiveTest,
    /// The known-negative canary was reported as listed
    FailsNegativeTest,
    /// Both canaries misbehaved
    FailsBothTests,
}

impl HealthVerdict {
    /// Build a verdict from the two canary results.
    #[must_use]
    pub const fn from_canaries(negative_ok: bool, positive_ok: bool) -> Self {
        match (negative_ok, positive_ok) {
            (true, true) => Self::Healthy,
            (true, false) => Self::FailsPositiveTest,
            (false, true) => Self::FailsNegativeTest,
            (false, false) => Self::FailsBothTests,
        }
    }

    /// Whether the list's answers can be trusted this run.
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Short lowercase label for log output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::FailsPositiveTest => "fails-positive-test",
            Self::FailsNegativeTest => "fails-negative-test",
            Self::FailsBothTests => "fails-both-tests",
        }
    }
}
