//! StaticCourier - 固定応答の courier lookup
//!
//! ネットワークなしで resolver を動かすためのもの。
//! 呼び出し回数を数え、最初の N 回だけ Transient エラーを返すこともできる。

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{LookupError, ServiceabilityQuery, ShippingRate};
use crate::ports::CourierLookup;

/// Duration reported by injected timeouts when no delay is configured.
pub const INJECTED_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub enum StaticResponse {
    Serviceable(ShippingRate),
    Unserviceable,
    Failing(LookupError),
}

pub struct StaticCourier {
    response: StaticResponse,
    delay: Option<Duration>,
    remaining_failures: AtomicU32,
    calls: AtomicU32,
}

impl StaticCourier {
    pub fn new(response: StaticResponse) -> Self {
        Self {
            response,
            delay: None,
            remaining_failures: AtomicU32::new(0),
            calls: AtomicU32::new(0),
        }
    }

    pub fn serviceable(rate: ShippingRate) -> Self {
        Self::new(StaticResponse::Serviceable(rate))
    }

    pub fn unserviceable() -> Self {
        Self::new(StaticResponse::Unserviceable)
    }

    pub fn failing(error: LookupError) -> Self {
        Self::new(StaticResponse::Failing(error))
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer the first `n` calls with a timeout error.
    pub fn fail_first(self, n: u32) -> Self {
        self.remaining_failures.store(n, Ordering::Relaxed);
        self
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CourierLookup for StaticCourier {
    async fn lookup(
        &self,
        _query: &ServiceabilityQuery,
    ) -> Result<Option<ShippingRate>, LookupError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let injected = self
            .remaining_failures
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            return Err(LookupError::Timeout(self.delay.unwrap_or(INJECTED_TIMEOUT)));
        }

        match &self.response {
            StaticResponse::Serviceable(rate) => Ok(Some(rate.clone())),
            StaticResponse::Unserviceable => Ok(None),
            StaticResponse::Failing(e) => Err(e.clone()),
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}
