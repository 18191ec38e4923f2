//! ServiceabilityQuery - 配送可否の問い合わせ入力

use serde::Serialize;

use super::errors::QueryError;

/// Destination and parcel weight for a shipping quote.
///
/// Only non-emptiness of the postal code is checked here; the exact format
/// belongs to whichever courier answers the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceabilityQuery {
    postal_code: String,
    weight_grams: u32,
}

impl ServiceabilityQuery {
    pub fn new(postal_code: impl AsRef<str>, weight_grams: u32) -> Result<Self, QueryError> {
        let postal_code = postal_code.as_ref().trim();
        if postal_code.is_empty() {
            return Err(QueryError::EmptyPostalCode);
        }
        if weight_grams == 0 {
            return Err(QueryError::ZeroWeight);
        }
        Ok(Self {
            postal_code: postal_code.to_string(),
            weight_grams,
        })
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn weight_grams(&self) -> u32 {
        self.weight_grams
    }

    /// Weight in kilograms, rounded up to the next whole kilogram.
    pub fn weight_kg_rounded_up(&self) -> u64 {
        u64::from(self.weight_grams).div_ceil(1000)
    }
}
