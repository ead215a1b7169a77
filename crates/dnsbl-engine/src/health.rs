//! RFC 5782 list health verification.
//!
//! Before a list's answer about the real target is trusted, two canary
//! queries probe the zone itself: a reserved entry guaranteed NOT to be
//! listed (127.0.0.1, or the literal `invalid` for domain lists) and one
//! guaranteed to BE listed (127.0.0.2 / `test`). A list that gets either
//! wrong is misconfigured or dead and its real answer is never requested.

use dnsbl_core::{HealthVerdict, Target};

use crate::limiter::QueryLimiter;
use crate::resolver::{LookupError, Resolve};

// Reversed-octet forms of 127.0.0.1 and 127.0.0.2 (RFC 5782 §5).
const IP_NEGATIVE_CANARY: &str = "1.0.0.127";
const IP_POSITIVE_CANARY: &str = "2.0.0.127";
// Domain-list test vectors (RFC 5782 §5).
const DOMAIN_NEGATIVE_CANARY: &str = "invalid";
const DOMAIN_POSITIVE_CANARY: &str = "test";

/// What a canary probe observed.
enum CanaryAnswer {
    Listed,
    NotListed,
    /// Timeout or resolver failure: the canary cannot be called correct
    Unknown,
}

/// Runs the test-vector protocol against one list zone.
pub struct HealthVerifier<'a> {
    resolver: &'a dyn Resolve,
    limiter: &'a QueryLimiter,
}

impl<'a> HealthVerifier<'a> {
    /// Create a verifier sharing the run's resolver and rate limiter.
    #[must_use]
    pub fn new(resolver: &'a dyn Resolve, limiter: &'a QueryLimiter) -> Self {
        Self { resolver, limiter }
    }

    /// Probe both canaries and classify the list.
    ///
    /// The canaries never touch the real target; only the target's kind
    /// selects which test vectors apply.
    pub async fn verify(&self, target: &Target, zone: &str) -> HealthVerdict {
        let (negative, positive) = if target.is_ip() {
            (IP_NEGATIVE_CANARY, IP_POSITIVE_CANARY)
        } else {
            (DOMAIN_NEGATIVE_CANARY, DOMAIN_POSITIVE_CANARY)
        };

        let negative_ok = matches!(
            self.probe(&format!("{negative}.{zone}")).await,
            CanaryAnswer::NotListed
        );
        let positive_ok = matches!(
            self.probe(&format!("{positive}.{zone}")).await,
            CanaryAnswer::Listed
        );

        HealthVerdict::from_canaries(negative_ok, positive_ok)
    }

    async fn probe(&self, name: &str) -> CanaryAnswer {
        self.limiter.acquire().await;

        match self.resolver.lookup(name).await {
            Ok(answer) if !answer.is_empty() => CanaryAnswer::Listed,
            Ok(_) | Err(LookupError::NotFound) => CanaryAnswer::NotListed,
            Err(_) => CanaryAnswer::Unknown,
        }
    }
}
