//! Retry policy and a lookup wrapper that applies it.
//!
//! Only `Transient` lookup errors are retried. `Ok(None)` is an answer,
//! not a failure, and is returned as-is.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{LookupError, ServiceabilityQuery, ShippingRate};
use crate::ports::CourierLookup;

/// Retry policy for courier lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Base delay for the first retry.
    pub base_delay: Duration,

    /// Backoff multiplier for exponential backoff.
    pub multiplier: f64,

    /// Total attempts including the first one. 1 disables retrying.
    pub max_attempts: u32,

    /// Upper bound for any single backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay: Duration::from_millis(200),
            multiplier: 2.0,
            max_attempts: 1,
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no backoff.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay before the next attempt, given how many attempts already failed.
    ///
    /// delay = base_delay * multiplier^(attempts - 1)
    ///
    /// With base_delay=200ms, multiplier=2.0:
    /// - after attempt 1: 200ms
    /// - after attempt 2: 400ms
    /// - after attempt 3: 800ms
    ///
    /// The result never exceeds `max_delay`, including when the power
    /// overflows to infinity.
    pub fn next_delay(&self, attempts: u32) -> Duration {
        let exponent = i32::try_from(attempts.saturating_sub(1)).unwrap_or(i32::MAX);
        let delay_secs = self.base_delay.as_secs_f64() * self.multiplier.powi(exponent);
        Duration::try_from_secs_f64(delay_secs)
            .unwrap_or(Duration::MAX)
            .min(self.max_delay)
    }
}

pub struct RetryingCourier<L> {
    inner: L,
    policy: RetryPolicy,
}

impl<L: CourierLookup> RetryingCourier<L> {
    pub fn new(inner: L, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: CourierLookup> CourierLookup for RetryingCourier<L> {
    async fn lookup(
        &self,
        query: &ServiceabilityQuery,
    ) -> Result<Option<ShippingRate>, LookupError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.inner.lookup(query).await {
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    let delay = self.policy.next_delay(attempt);
                    warn!(
                        courier = self.inner.name(),
                        attempt,
                        max_attempts,
                        ?delay,
                        error = %e,
                        "courier lookup failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
