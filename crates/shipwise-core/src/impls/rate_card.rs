//! RateCardCourier - 料金表ベースの courier lookup
//!
//! cost = base_rate + ceil(weight_kg) * per_kg_rate

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{LookupError, ServiceabilityQuery, ShippingRate};
use crate::ports::CourierLookup;

/// Pricing and coverage of a single courier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateCard {
    pub carrier_name: String,
    pub base_rate: u64,
    pub per_kg_rate: u64,
    pub handling_fee: u64,
    pub estimated_delivery_days: u32,

    /// Postal-code prefixes the courier delivers to. Empty means everywhere.
    pub serviceable_prefixes: Vec<String>,

    /// Parcels heavier than this are declined.
    pub max_weight_grams: Option<u32>,

    /// Required number of ASCII digits. 0 disables the length check.
    pub postal_code_length: usize,

    pub description: String,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            carrier_name: "Standard Courier".to_string(),
            base_rate: 100,
            per_kg_rate: 50,
            handling_fee: 0,
            estimated_delivery_days: 3,
            serviceable_prefixes: Vec::new(),
            max_weight_grams: None,
            postal_code_length: 6,
            description: "Door-step delivery by courier, prepaid at checkout".to_string(),
        }
    }
}

impl RateCard {
    pub fn cost_for(&self, query: &ServiceabilityQuery) -> u64 {
        let increments = query.weight_kg_rounded_up().saturating_mul(self.per_kg_rate);
        self.base_rate.saturating_add(increments)
    }

    fn check_format(&self, postal_code: &str) -> Result<(), LookupError> {
        let digits_only = postal_code.chars().all(|c| c.is_ascii_digit());
        let length_ok = self.postal_code_length == 0 || postal_code.len() == self.postal_code_length;
        if digits_only && length_ok {
            Ok(())
        } else {
            Err(LookupError::InvalidPostalCode(postal_code.to_string()))
        }
    }

    fn covers(&self, postal_code: &str) -> bool {
        self.serviceable_prefixes.is_empty()
            || self
                .serviceable_prefixes
                .iter()
                .any(|p| postal_code.starts_with(p.as_str()))
    }
}

/// Courier lookup answered locally from a [`RateCard`].
#[derive(Debug, Clone)]
pub struct RateCardCourier {
    card: RateCard,
}

impl RateCardCourier {
    pub fn new(card: RateCard) -> Self {
        Self { card }
    }

    pub fn card(&self) -> &RateCard {
        &self.card
    }
}

#[async_trait]
impl CourierLookup for RateCardCourier {
    async fn lookup(
        &self,
        query: &ServiceabilityQuery,
    ) -> Result<Option<ShippingRate>, LookupError> {
        let postal_code = query.postal_code();
        self.card.check_format(postal_code)?;

        if !self.card.covers(postal_code) {
            debug!(postal_code, carrier = %self.card.carrier_name, "destination not covered");
            return Ok(None);
        }
        if let Some(max) = self.card.max_weight_grams
            && query.weight_grams() > max
        {
            debug!(weight_grams = query.weight_grams(), max, "parcel over courier weight limit");
            return Ok(None);
        }

        let rate = ShippingRate::courier(self.card.carrier_name.clone(), self.card.cost_for(query))
            .with_handling_fee(self.card.handling_fee)
            .with_estimated_delivery_days(self.card.estimated_delivery_days)
            .with_description(self.card.description.clone());
        Ok(Some(rate))
    }

    fn name(&self) -> &str {
        &self.card.carrier_name
    }
}
