//! Shipping Option Resolver
//!
//! 宛先と重量から提示する配送オプションを決める。
//!
//! 1. courier lookup を呼ぶ（失敗・配送不可は「courier なし」として扱う）
//! 2. courier の料金があれば先頭に置く
//! 3. courier なし、または重量がしきい値以上なら transport fallback を追加
//!
//! 結果は常に 1 件または 2 件で、空にはならない。

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, error, instrument, warn};

use crate::domain::{ServiceabilityQuery, ShippingOptions, ShippingRate};
use crate::ports::CourierLookup;

pub const DEFAULT_WEIGHT_THRESHOLD_GRAMS: u32 = 5000;
pub const DEFAULT_FALLBACK_HANDLING_FEE: u64 = 150;
pub const DEFAULT_FALLBACK_CARRIER: &str = "Regional Transport";
pub const DEFAULT_FALLBACK_DESCRIPTION: &str =
    "Freight is paid by the recipient on collection at the regional transport depot";

/// When and how the transport fallback is offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// At or above this weight the fallback is offered next to the courier.
    pub weight_threshold_grams: u32,
    pub handling_fee: u64,
    pub carrier_name: String,
    pub description: String,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            weight_threshold_grams: DEFAULT_WEIGHT_THRESHOLD_GRAMS,
            handling_fee: DEFAULT_FALLBACK_HANDLING_FEE,
            carrier_name: DEFAULT_FALLBACK_CARRIER.to_string(),
            description: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

impl FallbackPolicy {
    pub fn transport_rate(&self) -> ShippingRate {
        ShippingRate::transport(self.carrier_name.clone(), self.handling_fee)
            .with_description(self.description.clone())
    }

    pub fn is_heavy(&self, weight_grams: u32) -> bool {
        weight_grams >= self.weight_threshold_grams
    }
}

/// Steps 2-4 of resolution, once the courier answer is known.
///
/// A courier rate that is not of type COURIER, or that reports itself as
/// unserviceable, counts as no courier.
pub fn assemble_options(
    courier: Option<ShippingRate>,
    weight_grams: u32,
    policy: &FallbackPolicy,
) -> ShippingOptions {
    let courier = courier.filter(|rate| {
        let usable = rate.is_courier() && rate.is_serviceable;
        if !usable {
            debug!(kind = %rate.kind, is_serviceable = rate.is_serviceable, "discarding courier answer");
        }
        usable
    });

    let mut rates = Vec::with_capacity(2);
    let offer_fallback = match courier {
        Some(rate) => {
            rates.push(rate);
            policy.is_heavy(weight_grams)
        }
        None => true,
    };
    if offer_fallback {
        rates.push(policy.transport_rate());
    }

    debug_assert!((1..=2).contains(&rates.len()));
    match ShippingOptions::from_rates(rates) {
        Some(options) => options,
        None => {
            error!("shipping options came out empty, offering transport fallback only");
            ShippingOptions::single(policy.transport_rate())
        }
    }
}

/// Resolve shipping options using the given lookup and fallback policy.
///
/// Never fails: lookup errors, and panics raised inside the lookup, degrade
/// to the transport fallback.
pub async fn resolve_shipping_options<L>(
    query: &ServiceabilityQuery,
    lookup: &L,
    policy: &FallbackPolicy,
) -> ShippingOptions
where
    L: CourierLookup + ?Sized,
{
    let answer = AssertUnwindSafe(lookup.lookup(query)).catch_unwind().await;
    let courier = match answer {
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            warn!(
                courier = lookup.name(),
                panic = %message,
                "courier lookup panicked, treating as unserviceable"
            );
            None
        }
        Ok(Ok(Some(rate))) => Some(rate),
        Ok(Ok(None)) => {
            debug!(courier = lookup.name(), "destination not serviceable by courier");
            None
        }
        Ok(Err(e)) => {
            warn!(
                courier = lookup.name(),
                kind = ?e.kind(),
                error = %e,
                "courier lookup failed, treating as unserviceable"
            );
            None
        }
    };
    assemble_options(courier, query.weight_grams(), policy)
}

/// ShippingResolver は courier lookup と fallback policy を束ねる
///
/// # 使用例
/// ```ignore
/// let resolver = ShippingResolver::new(RateCardCourier::new(RateCard::default()));
/// let options = resolver.resolve(&ServiceabilityQuery::new("500001", 2000)?).await;
/// ```
pub struct ShippingResolver<L> {
    lookup: L,
    policy: FallbackPolicy,
}

impl<L: CourierLookup> ShippingResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_policy(lookup, FallbackPolicy::default())
    }

    pub fn with_policy(lookup: L, policy: FallbackPolicy) -> Self {
        Self { lookup, policy }
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    #[instrument(
        skip(self, query),
        fields(postal_code = query.postal_code(), weight_grams = query.weight_grams())
    )]
    pub async fn resolve(&self, query: &ServiceabilityQuery) -> ShippingOptions {
        let options = resolve_shipping_options(query, &self.lookup, &self.policy).await;
        debug!(count = options.len(), courier = options.courier().is_some(), "resolved shipping options");
        options
    }
}
