//! CourierLookup port - courier の配送可否・料金の問い合わせ

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{LookupError, ServiceabilityQuery, ShippingRate};

/// CourierLookup は宛先と重量から COURIER の料金を返す
///
/// # 戻り値
/// - `Ok(Some(rate))`: 配送可能（`rate.kind` は COURIER）
/// - `Ok(None)`: 配送不可
/// - `Err(_)`: 問い合わせ失敗（resolver は配送不可と同じに扱う）
///
/// タイムアウトやリトライは実装側の責務。
#[async_trait]
pub trait CourierLookup: Send + Sync {
    async fn lookup(&self, query: &ServiceabilityQuery)
    -> Result<Option<ShippingRate>, LookupError>;

    /// Name used in log lines.
    fn name(&self) -> &str;
}

#[async_trait]
impl<L: CourierLookup + ?Sized> CourierLookup for Arc<L> {
    async fn lookup(
        &self,
        query: &ServiceabilityQuery,
    ) -> Result<Option<ShippingRate>, LookupError> {
        (**self).lookup(query).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<'a, L: CourierLookup + ?Sized> CourierLookup for &'a L {
    async fn lookup(
        &self,
        query: &ServiceabilityQuery,
    ) -> Result<Option<ShippingRate>, LookupError> {
        (**self).lookup(query).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::StaticCourier;

    fn assert_lookup<L: CourierLookup>(_: &L) {}

    #[tokio::test]
    async fn references_and_arcs_forward_to_the_inner_lookup() {
        let courier = Arc::new(StaticCourier::unserviceable());
        let query = ServiceabilityQuery::new("500001", 100).unwrap();

        let borrowed: &StaticCourier = &courier;
        assert_lookup(&borrowed);
        assert_eq!(borrowed.lookup(&query).await.unwrap(), None);
        assert_eq!(CourierLookup::name(&borrowed), "static");

        assert_lookup(&courier);
        assert_eq!(courier.lookup(&query).await.unwrap(), None);
        assert_eq!(courier.calls(), 2);
    }
}
