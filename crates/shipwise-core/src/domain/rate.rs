//! ShippingRate: one deliverable option presented at checkout.
//!
//! The serialized shape is consumed by the checkout client, so field names
//! and the `type` tag values are part of the wire contract.

use serde::{Deserialize, Deserializer, Serialize};

/// Delivery channel of a rate.
///
/// Serialized as SCREAMING_SNAKE_CASE: COURIER / TRANSPORT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingType {
    /// API-quoted parcel carrier, paid up front.
    Courier,
    /// Manual freight, paid by the recipient at a regional depot.
    Transport,
}

impl std::fmt::Display for ShippingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShippingType::Courier => write!(f, "COURIER"),
            ShippingType::Transport => write!(f, "TRANSPORT"),
        }
    }
}

/// A single delivery option.
///
/// Amounts are whole currency units; the unit itself is decided by the
/// surrounding storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    #[serde(rename = "type")]
    pub kind: ShippingType,

    pub carrier_name: String,

    /// Charged up front. 0 for pay-at-destination arrangements.
    pub cost: u64,

    /// Platform fee, independent of `cost`.
    pub handling_fee: u64,

    /// Always positive when present.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "positive_days"
    )]
    pub estimated_delivery_days: Option<u32>,

    pub is_serviceable: bool,

    pub description: String,
}

impl ShippingRate {
    pub fn courier(carrier_name: impl Into<String>, cost: u64) -> Self {
        Self {
            kind: ShippingType::Courier,
            carrier_name: carrier_name.into(),
            cost,
            handling_fee: 0,
            estimated_delivery_days: None,
            is_serviceable: true,
            description: String::new(),
        }
    }

    pub fn transport(carrier_name: impl Into<String>, handling_fee: u64) -> Self {
        Self {
            kind: ShippingType::Transport,
            carrier_name: carrier_name.into(),
            cost: 0,
            handling_fee,
            estimated_delivery_days: None,
            is_serviceable: true,
            description: String::new(),
        }
    }

    pub fn with_handling_fee(mut self, fee: u64) -> Self {
        self.handling_fee = fee;
        self
    }

    pub fn with_estimated_delivery_days(mut self, days: u32) -> Self {
        // 0 日の見積もりは「予測不能」と同じ扱い
        self.estimated_delivery_days = (days > 0).then_some(days);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// What the customer pays at checkout for this option.
    pub fn total_charge(&self) -> u64 {
        self.cost.saturating_add(self.handling_fee)
    }

    pub fn is_courier(&self) -> bool {
        self.kind == ShippingType::Courier
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ShippingType::Transport
    }
}

// 0 日は「予測不能」として None に寄せる
fn positive_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let days = Option::<u32>::deserialize(deserializer)?;
    Ok(days.filter(|d| *d > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipping_type_serializes_as_wire_names() {
        let s = serde_json::to_string(&ShippingType::Courier).unwrap();
        assert_eq!(s, "\"COURIER\"");

        let s = serde_json::to_string(&ShippingType::Transport).unwrap();
        assert_eq!(s, "\"TRANSPORT\"");
    }

    #[test]
    fn rate_uses_type_field_and_omits_missing_estimate() {
        let rate = ShippingRate::transport("Regional Transport", 150)
            .with_description("Freight paid by recipient");
        let v = serde_json::to_value(&rate).unwrap();

        assert_eq!(v["type"], "TRANSPORT");
        assert_eq!(v["cost"], 0);
        assert_eq!(v["handling_fee"], 150);
        assert_eq!(v["is_serviceable"], true);
        assert!(v.get("estimated_delivery_days").is_none());
        assert!(v.get("kind").is_none());
    }

    #[test]
    fn rate_deserializes_from_wire_shape() {
        let raw = serde_json::json!({
            "type": "COURIER",
            "carrier_name": "Express Courier",
            "cost": 200,
            "handling_fee": 0,
            "estimated_delivery_days": 3,
            "is_serviceable": true,
            "description": "Door delivery"
        });
        let rate: ShippingRate = serde_json::from_value(raw).unwrap();
        assert_eq!(rate.kind, ShippingType::Courier);
        assert_eq!(rate.estimated_delivery_days, Some(3));
        assert_eq!(rate.total_charge(), 200);
    }

    #[test]
    fn zero_day_estimate_is_dropped_on_deserialize() {
        let raw = serde_json::json!({
            "type": "COURIER",
            "carrier_name": "Express Courier",
            "cost": 200,
            "handling_fee": 0,
            "estimated_delivery_days": 0,
            "is_serviceable": true,
            "description": ""
        });
        let rate: ShippingRate = serde_json::from_value(raw).unwrap();
        assert_eq!(rate.estimated_delivery_days, None);

        let raw = serde_json::json!({
            "type": "COURIER",
            "carrier_name": "Express Courier",
            "cost": 200,
            "handling_fee": 0,
            "estimated_delivery_days": null,
            "is_serviceable": true,
            "description": ""
        });
        let rate: ShippingRate = serde_json::from_value(raw).unwrap();
        assert_eq!(rate.estimated_delivery_days, None);
    }

    #[test]
    fn zero_day_estimate_is_dropped() {
        let rate = ShippingRate::courier("X", 10).with_estimated_delivery_days(0);
        assert_eq!(rate.estimated_delivery_days, None);
    }

    #[test]
    fn total_charge_saturates() {
        let rate = ShippingRate::courier("X", u64::MAX).with_handling_fee(1);
        assert_eq!(rate.total_charge(), u64::MAX);
    }
}
