//! Freight Cost Calculator
//!
//! The pricing pipeline: volume weight, aggregate weights, tiered rate lookup
//! and the cost breakdown. Every function here is pure; degraded inputs are
//! reported through [`PricingWarning`] values instead of errors.

use tracing::{debug, warn};

use crate::core::cost::types::{
    AdditionalCharge, AggregateWeights, CargoUnit, CostBreakdown, DeliveryOptions, PalletCost,
    PricingWarning, RateResolution, RateSource, RateTier, VOLUMETRIC_DIVISOR,
};
use crate::core::cost::utils::{round_half_up, sum_additional_charges, total_volume_cbm};

/// Dimensional weight of one unit: `ceil(L × W × H / 6000)` kilograms
///
/// A zero dimension yields 0. Non-finite or negative products also yield 0.
/// Weights beyond `u64::MAX` kilograms saturate at `u64::MAX`.
pub fn compute_volume_weight(length: f64, width: f64, height: f64) -> u64 {
    let volume_weight = ((length * width * height) / VOLUMETRIC_DIVISOR).ceil();
    if !volume_weight.is_finite() || volume_weight <= 0.0 {
        return 0;
    }
    if volume_weight >= u64::MAX as f64 {
        return u64::MAX;
    }
    volume_weight as u64
}

/// Total actual weight, total volume weight and chargeable weight of a shipment
///
/// The volume weight total saturates at `u64::MAX`.
pub fn compute_aggregate_weights(units: &[CargoUnit]) -> AggregateWeights {
    let total_actual_weight: f64 = units.iter().map(|u| u.weight * u.quantity as f64).sum();
    let total_volume_weight = units.iter().fold(0u64, |total, u| {
        total.saturating_add(u.volume_weight().saturating_mul(u64::from(u.quantity)))
    });

    AggregateWeights {
        total_actual_weight,
        total_volume_weight,
        chargeable_weight: total_actual_weight.max(total_volume_weight as f64),
    }
}

/// Per-kg rate for `weight` from an unordered tier table
///
/// Returns 0 for an empty table. See [`resolve_rate_detailed`] for provenance.
pub fn resolve_rate(weight: f64, tiers: &[RateTier]) -> f64 {
    let resolution = resolve_rate_detailed(weight, tiers);
    if resolution.source == RateSource::NoTiers {
        warn!("No freight rates provided, returning 0");
    }
    resolution.rate
}

/// Rate lookup with the matched tier and how it was chosen
///
/// Tiers are sorted ascending by minimum weight and the first tier whose
/// inclusive bounds contain `weight` wins. When none does, the tier with the
/// largest minimum is applied.
pub fn resolve_rate_detailed(weight: f64, tiers: &[RateTier]) -> RateResolution {
    if tiers.is_empty() {
        return RateResolution {
            rate: 0.0,
            tier: None,
            source: RateSource::NoTiers,
        };
    }

    let mut sorted: Vec<&RateTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| a.lower_bound().total_cmp(&b.lower_bound()));

    if let Some(tier) = sorted.iter().find(|t| t.contains(weight)) {
        return RateResolution {
            rate: tier.rate,
            tier: Some((*tier).clone()),
            source: RateSource::Tier,
        };
    }

    // sorted is non-empty here
    let top = sorted[sorted.len() - 1];
    let overflow = sorted.iter().all(|t| weight > t.upper_bound());
    RateResolution {
        rate: top.rate,
        tier: Some(top.clone()),
        source: if overflow {
            RateSource::Overflow
        } else {
            RateSource::Unmatched
        },
    }
}

/// Freight cost of one cargo unit entry
///
/// The rate is resolved from the unit's own volume weight, not from the
/// shipment's chargeable weight.
pub fn price_unit(
    index: usize,
    unit: &CargoUnit,
    tiers: &[RateTier],
) -> (PalletCost, Option<PricingWarning>) {
    let volume_weight = unit.volume_weight();

    if !unit.has_complete_dimensions() {
        return (
            PalletCost {
                index,
                volume_weight,
                actual_weight: unit.weight,
                quantity: unit.quantity,
                rate: 0.0,
                rate_source: RateSource::Skipped,
                unit_cost: 0.0,
                line_cost: 0.0,
                skipped: true,
            },
            Some(PricingWarning::IncompleteDimensions { index }),
        );
    }

    let (rate, rate_source, warning) = match unit.rate_override {
        Some(rate) => (rate, RateSource::Override, None),
        None => {
            let resolution = resolve_rate_detailed(volume_weight as f64, tiers);
            let warning = match resolution.source {
                RateSource::NoTiers => Some(PricingWarning::NoRateTiers),
                RateSource::Overflow => Some(PricingWarning::RateOverflow {
                    weight: volume_weight as f64,
                    rate: resolution.rate,
                }),
                RateSource::Unmatched => Some(PricingWarning::UnmatchedWeight {
                    weight: volume_weight as f64,
                    rate: resolution.rate,
                }),
                RateSource::Tier | RateSource::Override | RateSource::Skipped => None,
            };
            (resolution.rate, resolution.source, warning)
        }
    };

    let unit_cost = round_half_up(volume_weight as f64 * rate);

    (
        PalletCost {
            index,
            volume_weight,
            actual_weight: unit.weight,
            quantity: unit.quantity,
            rate,
            rate_source,
            unit_cost,
            line_cost: unit_cost * unit.quantity as f64,
            skipped: false,
        },
        warning,
    )
}

/// Flat delivery cost for the requested vehicle, 0 when delivery is not required
pub fn compute_delivery_cost(delivery: &DeliveryOptions) -> (f64, Option<PricingWarning>) {
    if !delivery.required {
        return (0.0, None);
    }

    match delivery.vehicle_type.as_deref() {
        None | Some("") => (0.0, Some(PricingWarning::MissingVehicleType)),
        Some(vehicle_type) => match delivery.rates.get(vehicle_type) {
            Some(cost) => (*cost, None),
            None => (
                0.0,
                Some(PricingWarning::UnknownVehicleType {
                    vehicle_type: vehicle_type.to_string(),
                }),
            ),
        },
    }
}

/// Complete cost breakdown for a shipment
///
/// `total_cost = freight + delivery + clearance + additional charges`. No
/// rounding is applied beyond the per-unit freight cost.
pub fn compute_cost_breakdown(
    units: &[CargoUnit],
    tiers: &[RateTier],
    delivery: &DeliveryOptions,
    clearance_cost: f64,
    additional_charges: &[AdditionalCharge],
) -> CostBreakdown {
    let mut warnings = Vec::new();

    let mut lines = Vec::with_capacity(units.len());
    for (index, unit) in units.iter().enumerate() {
        let (line, warning) = price_unit(index, unit, tiers);
        if let Some(warning) = warning {
            record_warning(&mut warnings, warning);
        }
        lines.push(line);
    }
    let total_freight_cost: f64 = lines.iter().map(|l| l.line_cost).sum();

    let (delivery_cost, delivery_warning) = compute_delivery_cost(delivery);
    if let Some(warning) = delivery_warning {
        record_warning(&mut warnings, warning);
    }

    let total_additional_charges = sum_additional_charges(additional_charges);
    let weights = compute_aggregate_weights(units);

    let subtotal = total_freight_cost + delivery_cost + clearance_cost;
    let total_cost = subtotal + total_additional_charges;

    debug!(
        units = units.len(),
        chargeable_weight = weights.chargeable_weight,
        total_freight_cost,
        total_cost,
        "Computed cost breakdown"
    );

    CostBreakdown {
        total_freight_cost,
        delivery_cost,
        clearance_cost,
        total_additional_charges,
        subtotal,
        total_cost,
        total_actual_weight: weights.total_actual_weight,
        total_volume_weight: weights.total_volume_weight,
        chargeable_weight: weights.chargeable_weight,
        total_volume_cbm: total_volume_cbm(units),
        lines,
        warnings,
    }
}

/// Log a warning once and keep it for the caller
fn record_warning(warnings: &mut Vec<PricingWarning>, warning: PricingWarning) {
    if warnings.contains(&warning) {
        return;
    }
    warn!("{}", warning);
    warnings.push(warning);
}
