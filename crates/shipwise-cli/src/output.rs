//! Output formatting

use anyhow::Result;
use shipwise_core::{ServiceabilityQuery, ShippingOptions};

use crate::cli::OutputFormat;

pub fn print_options(
    format: OutputFormat,
    query: &ServiceabilityQuery,
    options: &ShippingOptions,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(options)?),
        OutputFormat::Table => print!("{}", render_table(query, options)),
    }
    Ok(())
}

fn render_table(query: &ServiceabilityQuery, options: &ShippingOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Shipping options for {} ({} g)\n",
        query.postal_code(),
        query.weight_grams()
    ));
    out.push_str(&"-".repeat(72));
    out.push('\n');
    out.push_str(&format!(
        "{:<10} {:<22} {:>8} {:>8} {:>8} {:>6}\n",
        "Type", "Carrier", "Cost", "Fee", "Total", "Days"
    ));
    for rate in options {
        let days = rate
            .estimated_delivery_days
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<10} {:<22} {:>8} {:>8} {:>8} {:>6}\n",
            rate.kind.to_string(),
            rate.carrier_name,
            rate.cost,
            rate.handling_fee,
            rate.total_charge(),
            days
        ));
    }
    out.push_str(&"-".repeat(72));
    out.push('\n');
    for rate in options {
        out.push_str(&format!("{}: {}\n", rate.kind, rate.description));
    }
    out
}
