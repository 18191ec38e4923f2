//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for quotes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Parser)]
#[command(name = "shipwise")]
#[command(version)]
#[command(about = "Resolve checkout shipping options for a destination and parcel weight")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML config file. Defaults are used when omitted.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote shipping options
    Quote {
        /// Destination postal code
        #[arg(long, short = 'p')]
        postal_code: String,

        /// Parcel weight in grams
        #[arg(long, short = 'w')]
        weight: u32,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Pretend the courier cannot serve the destination
        #[arg(long)]
        unserviceable: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quote_arguments() {
        let cli = Cli::parse_from([
            "shipwise", "quote", "--postal-code", "500001", "--weight", "6000", "-f", "table",
        ]);
        match cli.command {
            Commands::Quote {
                postal_code,
                weight,
                format,
                unserviceable,
            } => {
                assert_eq!(postal_code, "500001");
                assert_eq!(weight, 6000);
                assert_eq!(format, OutputFormat::Table);
                assert!(!unserviceable);
            }
            Commands::Config => panic!("expected quote"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["shipwise", "config", "--config", "ship.toml"]);
        assert!(matches!(cli.command, Commands::Config));
        assert_eq!(cli.config, Some(PathBuf::from("ship.toml")));
    }
}
