//! Argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Air-freight quotation tool
#[derive(Parser, Debug)]
#[command(name = "freight-quote", version, about = "Price air-freight shipments from tiered destination rates")]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(long, short, global = true, env = "FREIGHT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rate book file (YAML or JSON), overrides the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub rates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Price a shipment request file
    Quote {
        /// Destination in the rate book; falls back to the shipment file's destination
        #[arg(long, short)]
        destination: Option<String>,

        /// Shipment request file (YAML or JSON)
        #[arg(long, short, value_name = "FILE")]
        shipment: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the volume weight of one unit (dimensions in centimetres)
    VolumeWeight {
        length: f64,
        width: f64,
        height: f64,
    },

    /// List destinations, or the tiers of one destination
    Rates {
        /// Destination to show
        #[arg(long, short)]
        destination: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for quotations and rate listings
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}
