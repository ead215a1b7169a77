//! Global query-rate limiter.
//!
//! One limiter is shared by every worker; a slot must be acquired before
//! any outbound query, canaries included. Burst size is pinned to 1 so
//! queries are spaced rather than fired in an opening burst — list
//! operators rate-limit or ban abusive sources.

use std::num::NonZeroU32;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Lowest accepted queries/second.
pub const MIN_RATE: u32 = 1;
/// Highest accepted queries/second.
pub const MAX_RATE: u32 = 1000;

/// Shared cap on aggregate outbound query rate.
pub struct QueryLimiter {
    inner: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl QueryLimiter {
    /// Create a limiter for the given rate, clamped to
    /// [`MIN_RATE`]..=[`MAX_RATE`].
    #[must_use]
    pub fn new(queries_per_second: u32) -> Self {
        let rate = queries_per_second.clamp(MIN_RATE, MAX_RATE);
        let quota = Quota::per_second(NonZeroU32::new(rate).unwrap_or(NonZeroU32::MIN))
            .allow_burst(NonZeroU32::MIN);

        Self {
            inner: RateLimiter::direct(quota),
        }
    }

    /// Wait until the next query slot is available.
    pub async fn acquire(&self) {
        self.inner.until_ready().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn spaces_acquisitions() {
        // At 50 qps, 5 acquisitions must take at least (5-1)/50 = 80ms.
        let limiter = QueryLimiter::new(50);
        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire().await;
        }
        assert!(start.elapsed() >= Duration::from_millis(80));
    }

    #[tokio::test]
    async fn clamps_rate_to_bounds() {
        // Out-of-range rates must not panic; 0 is lifted to MIN_RATE.
        let limiter = QueryLimiter::new(0);
        limiter.acquire().await;
        let limiter = QueryLimiter::new(50_000);
        limiter.acquire().await;
    }
}
