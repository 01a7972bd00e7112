//! # freight-calc
//!
//! Air-freight quotation engine for export shipments.
//!
//! ## Features
//!
//! - **Volume weight**: `ceil(L × W × H / 6000)` per cargo unit
//! - **Chargeable weight**: the greater of actual and volume weight totals
//! - **Tiered rates**: per-destination weight bands with top-tier fallback
//! - **Cost breakdown**: freight, delivery, clearance and additional charges
//! - **Diagnostics**: degraded inputs are reported as warnings, never errors
//!
//! ## Quick Start
//!
//! ```rust
//! use freight_calc::core::cost::{
//!     AdditionalCharge, CargoUnit, DeliveryOptions, RateTier, compute_cost_breakdown,
//! };
//!
//! let units = vec![CargoUnit::new(83.0, 124.0, 152.0, 120.0)];
//! let tiers = vec![
//!     RateTier::new(100.0, 499.0, 250.0),
//!     RateTier::new(500.0, 999.0, 240.0),
//! ];
//! let breakdown = compute_cost_breakdown(
//!     &units,
//!     &tiers,
//!     &DeliveryOptions::none(),
//!     5350.0,
//!     &[AdditionalCharge::new("Documentation", 500.0)],
//! );
//!
//! // 261 kg × 250
//! assert_eq!(breakdown.total_freight_cost, 65250.0);
//! assert_eq!(breakdown.total_cost, 71100.0);
//! ```
//!
//! ## Quotation Service
//!
//! ```rust,no_run
//! use freight_calc::{Config, QuotationService, ShipmentRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/freight.yaml").await?;
//!     let service = QuotationService::from_config(&config).await?;
//!
//!     let request = ShipmentRequest::load_from_file("shipment.yaml").await?;
//!     let quotation = service.quote(&request)?;
//!     println!("{}", quotation.formatted_total());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{FreightError, Result};

// Export core pricing functionality
pub use crate::core::cost::{
    AdditionalCharge, CargoUnit, CostBreakdown, DeliveryOptions, PricingWarning, RateTier,
    compute_aggregate_weights, compute_cost_breakdown, compute_volume_weight, resolve_rate,
};

// Export quotation service
pub use services::{Quotation, QuotationService, RateBook, ShipmentRequest};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the Unix epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build information of the running binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
