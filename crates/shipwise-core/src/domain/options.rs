//! ShippingOptions - 空にならない配送オプション列
//!
//! 構築は resolver の assemble 処理からのみ行う（`from_rates` は crate 内限定）。
//! そのため「少なくとも 1 件」という事後条件は型で保証される。

use serde::Serialize;

use super::rate::ShippingRate;

/// Ordered, non-empty list of shipping rates.
///
/// When a courier rate is present it is always at index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShippingOptions {
    rates: Vec<ShippingRate>,
}

impl ShippingOptions {
    /// Returns `None` for an empty list.
    pub(crate) fn from_rates(rates: Vec<ShippingRate>) -> Option<Self> {
        if rates.is_empty() {
            None
        } else {
            Some(Self { rates })
        }
    }

    pub(crate) fn single(rate: ShippingRate) -> Self {
        Self { rates: vec![rate] }
    }

    pub fn as_slice(&self) -> &[ShippingRate] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    // 常に false だが clippy::len_without_is_empty のため提供
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn first(&self) -> &ShippingRate {
        &self.rates[0]
    }

    pub fn courier(&self) -> Option<&ShippingRate> {
        self.rates.iter().find(|r| r.is_courier())
    }

    pub fn transport(&self) -> Option<&ShippingRate> {
        self.rates.iter().find(|r| r.is_transport())
    }

    /// Lowest `total_charge`; earlier entries win ties.
    pub fn cheapest(&self) -> &ShippingRate {
        let mut best = &self.rates[0];
        for rate in &self.rates[1..] {
            if rate.total_charge() < best.total_charge() {
                best = rate;
            }
        }
        best
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShippingRate> {
        self.rates.iter()
    }

    pub fn into_vec(self) -> Vec<ShippingRate> {
        self.rates
    }
}

impl<'a> IntoIterator for &'a ShippingOptions {
    type Item = &'a ShippingRate;
    type IntoIter = std::slice::Iter<'a, ShippingRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}
