//! Configuration for shipping resolution.
//!
//! Loaded from an optional TOML file, then overridden from `SHIPWISE_*`
//! environment variables. Every field has a default, so an empty file (or
//! no file at all) yields the stock business constants.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::ConfigError;
use crate::impls::{RateCard, RetryPolicy};
use crate::resolver::{
    DEFAULT_FALLBACK_CARRIER, DEFAULT_FALLBACK_DESCRIPTION, DEFAULT_FALLBACK_HANDLING_FEE,
    DEFAULT_WEIGHT_THRESHOLD_GRAMS, FallbackPolicy,
};

pub const ENV_FALLBACK_HANDLING_FEE: &str = "SHIPWISE_FALLBACK_HANDLING_FEE";
pub const ENV_WEIGHT_THRESHOLD_GRAMS: &str = "SHIPWISE_WEIGHT_THRESHOLD_GRAMS";
pub const ENV_COURIER_BASE_RATE: &str = "SHIPWISE_COURIER_BASE_RATE";
pub const ENV_COURIER_PER_KG_RATE: &str = "SHIPWISE_COURIER_PER_KG_RATE";
pub const ENV_LOOKUP_TIMEOUT_MS: &str = "SHIPWISE_LOOKUP_TIMEOUT_MS";

/// Upper bound for `lookup.retry_max_attempts`.
pub const MAX_RETRY_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    #[serde(default)]
    pub fallback: FallbackConfig,

    #[serde(default)]
    pub courier: CourierConfig,

    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Transport fallback settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_weight_threshold_grams")]
    pub weight_threshold_grams: u32,

    #[serde(default = "default_fallback_handling_fee")]
    pub handling_fee: u64,

    #[serde(default = "default_fallback_carrier")]
    pub carrier_name: String,

    #[serde(default = "default_fallback_description")]
    pub description: String,
}

/// Rate-card courier settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierConfig {
    #[serde(default = "default_courier_carrier")]
    pub carrier_name: String,

    #[serde(default = "default_base_rate")]
    pub base_rate: u64,

    #[serde(default = "default_per_kg_rate")]
    pub per_kg_rate: u64,

    #[serde(default)]
    pub handling_fee: u64,

    #[serde(default = "default_estimated_delivery_days")]
    pub estimated_delivery_days: u32,

    /// Empty means every postal code is covered.
    #[serde(default)]
    pub serviceable_prefixes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight_grams: Option<u32>,

    #[serde(default = "default_postal_code_length")]
    pub postal_code_length: usize,

    #[serde(default = "default_courier_description")]
    pub description: String,
}

/// Timeout and retry applied around the courier lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,

    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,

    #[serde(default = "default_retry_multiplier")]
    pub retry_multiplier: f64,

    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

fn default_weight_threshold_grams() -> u32 {
    DEFAULT_WEIGHT_THRESHOLD_GRAMS
}

fn default_fallback_handling_fee() -> u64 {
    DEFAULT_FALLBACK_HANDLING_FEE
}

fn default_fallback_carrier() -> String {
    DEFAULT_FALLBACK_CARRIER.to_string()
}

fn default_fallback_description() -> String {
    DEFAULT_FALLBACK_DESCRIPTION.to_string()
}

fn default_courier_carrier() -> String {
    RateCard::default().carrier_name
}

fn default_base_rate() -> u64 {
    100
}

fn default_per_kg_rate() -> u64 {
    50
}

fn default_estimated_delivery_days() -> u32 {
    3
}

fn default_postal_code_length() -> usize {
    6
}

fn default_courier_description() -> String {
    RateCard::default().description
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_retry_max_attempts() -> u32 {
    1
}

fn default_retry_base_delay_ms() -> u64 {
    200
}

fn default_retry_multiplier() -> f64 {
    2.0
}

fn default_retry_max_delay_ms() -> u64 {
    10_000
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            weight_threshold_grams: default_weight_threshold_grams(),
            handling_fee: default_fallback_handling_fee(),
            carrier_name: default_fallback_carrier(),
            description: default_fallback_description(),
        }
    }
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            carrier_name: default_courier_carrier(),
            base_rate: default_base_rate(),
            per_kg_rate: default_per_kg_rate(),
            handling_fee: 0,
            estimated_delivery_days: default_estimated_delivery_days(),
            serviceable_prefixes: Vec::new(),
            max_weight_grams: None,
            postal_code_length: default_postal_code_length(),
            description: default_courier_description(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_multiplier: default_retry_multiplier(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

impl FallbackConfig {
    pub fn policy(&self) -> FallbackPolicy {
        FallbackPolicy {
            weight_threshold_grams: self.weight_threshold_grams,
            handling_fee: self.handling_fee,
            carrier_name: self.carrier_name.clone(),
            description: self.description.clone(),
        }
    }
}

impl CourierConfig {
    pub fn rate_card(&self) -> RateCard {
        RateCard {
            carrier_name: self.carrier_name.clone(),
            base_rate: self.base_rate,
            per_kg_rate: self.per_kg_rate,
            handling_fee: self.handling_fee,
            estimated_delivery_days: self.estimated_delivery_days,
            serviceable_prefixes: self.serviceable_prefixes.clone(),
            max_weight_grams: self.max_weight_grams,
            postal_code_length: self.postal_code_length,
            description: self.description.clone(),
        }
    }
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            base_delay: Duration::from_millis(self.retry_base_delay_ms),
            multiplier: self.retry_multiplier,
            max_attempts: self.retry_max_attempts,
            max_delay: Duration::from_millis(self.retry_max_delay_ms),
        }
    }
}

impl ShippingConfig {
    /// Load from `path` (defaults when `None`), apply environment overrides, validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`ShippingConfig::load`], reading overrides through `var`.
    pub fn load_with<F>(path: Option<&Path>, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                info!("no config file given, using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides(var)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply `SHIPWISE_*` overrides using `var` to read each key.
    pub fn apply_env_overrides<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_from(&var, ENV_FALLBACK_HANDLING_FEE, &mut self.fallback.handling_fee)?;
        override_from(
            &var,
            ENV_WEIGHT_THRESHOLD_GRAMS,
            &mut self.fallback.weight_threshold_grams,
        )?;
        override_from(&var, ENV_COURIER_BASE_RATE, &mut self.courier.base_rate)?;
        override_from(&var, ENV_COURIER_PER_KG_RATE, &mut self.courier.per_kg_rate)?;
        override_from(&var, ENV_LOOKUP_TIMEOUT_MS, &mut self.lookup.timeout_ms)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback.weight_threshold_grams == 0 {
            return Err(ConfigError::Invalid(
                "fallback.weight_threshold_grams must be positive".to_string(),
            ));
        }
        if self.lookup.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "lookup.timeout_ms must be positive".to_string(),
            ));
        }
        if self.lookup.retry_max_attempts > MAX_RETRY_ATTEMPTS {
            return Err(ConfigError::Invalid(format!(
                "lookup.retry_max_attempts must be at most {MAX_RETRY_ATTEMPTS}"
            )));
        }
        if !(self.lookup.retry_multiplier.is_finite() && self.lookup.retry_multiplier >= 1.0) {
            return Err(ConfigError::Invalid(
                "lookup.retry_multiplier must be a finite number >= 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

fn override_from<F, T>(var: &F, key: &str, slot: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        return Ok(());
    };
    let parsed = raw.trim().parse().map_err(|e: T::Err| {
        debug!(key, error = %e, "rejecting environment override");
        ConfigError::InvalidEnv {
            key: key.to_string(),
            value: raw.clone(),
        }
    })?;
    info!(key, value = %raw.trim(), "config overridden from environment");
    *slot = parsed;
    Ok(())
}
