//! Command implementations

use std::sync::Arc;

use anyhow::{Context, Result};
use shipwise_core::impls::{RateCardCourier, RetryingCourier, StaticCourier, TimeoutCourier};
use shipwise_core::{CourierLookup, ServiceabilityQuery, ShippingConfig, ShippingResolver};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::output;

pub async fn execute(cli: Cli) -> Result<()> {
    let config = ShippingConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Quote {
            postal_code,
            weight,
            format,
            unserviceable,
        } => {
            let query = ServiceabilityQuery::new(&postal_code, weight)
                .with_context(|| format!("invalid quote request for '{postal_code}'"))?;

            let courier: Arc<dyn CourierLookup> = if unserviceable {
                Arc::new(StaticCourier::unserviceable())
            } else {
                build_courier(&config)
            };
            info!(courier = courier.name(), "quoting shipping options");

            let resolver = ShippingResolver::with_policy(courier, config.fallback.policy());
            let options = resolver.resolve(&query).await;
            output::print_options(format, &query, &options)
        }
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

/// RateCardCourier wrapped in retry, then an overall deadline.
fn build_courier(config: &ShippingConfig) -> Arc<dyn CourierLookup> {
    let courier = RateCardCourier::new(config.courier.rate_card());
    let courier = RetryingCourier::new(courier, config.lookup.retry_policy());
    Arc::new(TimeoutCourier::new(courier, config.lookup.timeout()))
}
