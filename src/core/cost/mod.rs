//! Freight Cost Calculation Module
//!
//! The deterministic pricing engine behind every quotation:
//! - Volume weight of a single cargo unit
//! - Aggregate actual, volume and chargeable weights
//! - Tiered per-kg rate resolution
//! - Cost breakdown with freight, delivery, clearance and extra charges

pub mod calculator;
pub mod types;
pub mod utils;

// Re-export main types and functions
pub use calculator::{
    compute_aggregate_weights, compute_cost_breakdown, compute_delivery_cost,
    compute_volume_weight, price_unit, resolve_rate, resolve_rate_detailed,
};
pub use types::{
    AdditionalCharge, AggregateWeights, CM3_PER_CBM, CargoUnit, CostBreakdown, DeliveryOptions,
    PalletCost, PricingWarning, RateResolution, RateSource, RateTier, VOLUMETRIC_DIVISOR,
};
pub use utils::{format_amount, format_money, round_half_up, sum_additional_charges, total_volume_cbm};
