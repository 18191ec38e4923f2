//! TimeoutCourier - lookup に期限を付けるラッパー

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{LookupError, ServiceabilityQuery, ShippingRate};
use crate::ports::CourierLookup;

pub struct TimeoutCourier<L> {
    inner: L,
    timeout: Duration,
}

impl<L: CourierLookup> TimeoutCourier<L> {
    pub fn new(inner: L, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: CourierLookup> CourierLookup for TimeoutCourier<L> {
    async fn lookup(
        &self,
        query: &ServiceabilityQuery,
    ) -> Result<Option<ShippingRate>, LookupError> {
        match tokio::time::timeout(self.timeout, self.inner.lookup(query)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(courier = self.inner.name(), timeout = ?self.timeout, "courier lookup timed out");
                Err(LookupError::Timeout(self.timeout))
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
