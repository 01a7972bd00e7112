//! Freight Cost Types
//!
//! Cargo units, rate tiers, charges and the computed breakdown shared by every
//! stage of the pricing pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Air-freight dimensional weight divisor (cm³ per chargeable kg)
pub const VOLUMETRIC_DIVISOR: f64 = 6000.0;

/// Cubic centimetres in one cubic metre
pub const CM3_PER_CBM: f64 = 1_000_000.0;

/// A physical shipping unit (usually a pallet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoUnit {
    /// Length in centimetres
    #[serde(default)]
    pub length: f64,
    /// Width in centimetres
    #[serde(default)]
    pub width: f64,
    /// Height in centimetres
    #[serde(default)]
    pub height: f64,
    /// Actual weight of one unit in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Number of identical units
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Per-kg rate that bypasses tier lookup for this unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_override: Option<f64>,
}

fn default_quantity() -> u32 {
    1
}

impl CargoUnit {
    pub fn new(length: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            length,
            width,
            height,
            weight,
            quantity: 1,
            rate_override: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_rate_override(mut self, rate: f64) -> Self {
        self.rate_override = Some(rate);
        self
    }

    /// False when any dimension is zero or not a number
    pub fn has_complete_dimensions(&self) -> bool {
        [self.length, self.width, self.height]
            .iter()
            .all(|d| *d != 0.0 && !d.is_nan())
    }

    /// Dimensional weight of a single unit
    pub fn volume_weight(&self) -> u64 {
        super::calculator::compute_volume_weight(self.length, self.width, self.height)
    }

    /// Volume of a single unit in cubic metres
    pub fn volume_cbm(&self) -> f64 {
        (self.length * self.width * self.height) / CM3_PER_CBM
    }
}

/// One weight band of a destination's tiered freight rates
///
/// Bounds are inclusive. A missing bound is open on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// Minimum chargeable weight (kg)
    #[serde(default)]
    pub min_weight: Option<f64>,
    /// Maximum chargeable weight (kg)
    #[serde(default)]
    pub max_weight: Option<f64>,
    /// Price per kilogram
    #[serde(alias = "base_rate")]
    pub rate: f64,
    /// Date from which the tier is published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl RateTier {
    pub fn new(min_weight: f64, max_weight: f64, rate: f64) -> Self {
        Self {
            min_weight: Some(min_weight),
            max_weight: Some(max_weight),
            rate,
            effective_date: None,
        }
    }

    /// Tier with no upper bound
    pub fn from_weight(min_weight: f64, rate: f64) -> Self {
        Self {
            min_weight: Some(min_weight),
            max_weight: None,
            rate,
            effective_date: None,
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.min_weight.unwrap_or(f64::NEG_INFINITY)
    }

    pub fn upper_bound(&self) -> f64 {
        self.max_weight.unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, weight: f64) -> bool {
        weight >= self.lower_bound() && weight <= self.upper_bound()
    }
}

/// Named extra cost line. Negative amounts model credits or discounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalCharge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub description: String,
    pub amount: f64,
}

impl AdditionalCharge {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            name: None,
            description: description.into(),
            amount,
        }
    }
}

/// Last-mile delivery requirement and the flat cost per vehicle type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOptions {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl DeliveryOptions {
    /// No delivery service
    pub fn none() -> Self {
        Self::default()
    }

    pub fn required(vehicle_type: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            required: true,
            vehicle_type: Some(vehicle_type.into()),
            rates,
        }
    }
}

/// Weight totals for a shipment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateWeights {
    /// Sum of actual weight × quantity
    pub total_actual_weight: f64,
    /// Sum of per-unit volume weight × quantity
    pub total_volume_weight: u64,
    /// Greater of the two totals
    pub chargeable_weight: f64,
}

/// Where a resolved rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Weight fell inside a tier
    Tier,
    /// Weight exceeded every tier; the top tier was applied
    Overflow,
    /// Weight matched no tier without exceeding all of them; the top tier was applied
    Unmatched,
    /// The unit carried its own rate
    Override,
    /// No tiers were available; rate is zero
    NoTiers,
    /// Unit excluded for incomplete dimensions
    Skipped,
}

/// Result of a rate lookup together with its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct RateResolution {
    pub rate: f64,
    pub tier: Option<RateTier>,
    pub source: RateSource,
}

/// Degraded-input conditions reported alongside a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingWarning {
    /// The destination has no rate tiers
    NoRateTiers,
    /// Weight above every tier maximum; top tier rate applied
    RateOverflow { weight: f64, rate: f64 },
    /// Weight inside a gap or below every tier; top tier rate applied
    UnmatchedWeight { weight: f64, rate: f64 },
    /// Unit skipped from the freight sum
    IncompleteDimensions { index: usize },
    /// Delivery vehicle not present in the rate map
    UnknownVehicleType { vehicle_type: String },
    /// Delivery required without a vehicle type
    MissingVehicleType,
}

impl fmt::Display for PricingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRateTiers => write!(f, "no freight rates provided, rate 0 used"),
            Self::RateOverflow { weight, rate } => write!(
                f,
                "weight {} kg exceeds every rate tier, top tier rate {} applied",
                weight, rate
            ),
            Self::UnmatchedWeight { weight, rate } => write!(
                f,
                "weight {} kg matches no rate tier, top tier rate {} applied",
                weight, rate
            ),
            Self::IncompleteDimensions { index } => write!(
                f,
                "cargo unit #{} has incomplete dimensions and was excluded",
                index + 1
            ),
            Self::UnknownVehicleType { vehicle_type } => write!(
                f,
                "unknown delivery vehicle type '{}', delivery cost 0",
                vehicle_type
            ),
            Self::MissingVehicleType => {
                write!(f, "delivery required but no vehicle type given, delivery cost 0")
            }
        }
    }
}

/// Freight cost of one cargo unit entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletCost {
    /// Position in the input list
    pub index: usize,
    pub volume_weight: u64,
    pub actual_weight: f64,
    pub quantity: u32,
    /// Per-kg rate applied
    pub rate: f64,
    pub rate_source: RateSource,
    /// Rounded cost of a single unit
    pub unit_cost: f64,
    /// `unit_cost × quantity`
    pub line_cost: f64,
    /// Excluded for incomplete dimensions
    pub skipped: bool,
}

/// Detailed quotation cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of per-unit freight costs
    pub total_freight_cost: f64,
    pub delivery_cost: f64,
    pub clearance_cost: f64,
    pub total_additional_charges: f64,
    /// Freight + delivery + clearance, before additional charges
    pub subtotal: f64,
    /// Grand total
    pub total_cost: f64,
    pub total_actual_weight: f64,
    pub total_volume_weight: u64,
    pub chargeable_weight: f64,
    /// Shipment volume in cubic metres
    pub total_volume_cbm: f64,
    pub lines: Vec<PalletCost>,
    #[serde(default)]
    pub warnings: Vec<PricingWarning>,
}

impl CostBreakdown {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
