//! Output rendering

use super::args::OutputFormat;
use crate::core::cost::{RateTier, format_amount, format_money};
use crate::services::Quotation;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt::Write;

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        OutputFormat::Text => Ok(None),
    }
}

/// Render a quotation in the requested format
pub fn render_quotation(quotation: &Quotation, format: OutputFormat) -> Result<String> {
    if let Some(serialized) = serialize(quotation, format)? {
        return Ok(serialized);
    }

    let b = &quotation.breakdown;
    let currency = quotation.currency.as_str();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Quotation {}", quotation.id);
    let _ = writeln!(out, "Destination: {}", quotation.destination);
    let _ = writeln!(
        out,
        "Created:     {}",
        quotation.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:>3}  {:>10}  {:>10}  {:>4}  {:>8}  {:>12}  {:>12}",
        "#", "Vol. wt", "Actual wt", "Qty", "Rate", "Unit cost", "Line cost"
    );
    for line in &b.lines {
        if line.skipped {
            let _ = writeln!(out, "{:>3}  skipped: incomplete dimensions", line.index + 1);
            continue;
        }
        let _ = writeln!(
            out,
            "{:>3}  {:>7} kg  {:>7} kg  {:>4}  {:>8}  {:>12}  {:>12}",
            line.index + 1,
            line.volume_weight,
            format_amount(line.actual_weight),
            line.quantity,
            format_amount(line.rate),
            format_amount(line.unit_cost),
            format_amount(line.line_cost),
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Chargeable weight:  {} kg (actual {} kg, volume {} kg)",
        format_amount(b.chargeable_weight),
        format_amount(b.total_actual_weight),
        b.total_volume_weight
    );
    let _ = writeln!(out, "Total volume:       {:.2} m3", b.total_volume_cbm);
    let _ = writeln!(out);

    let rows = [
        ("Freight", b.total_freight_cost),
        ("Delivery", b.delivery_cost),
        ("Clearance", b.clearance_cost),
        ("Subtotal", b.subtotal),
        ("Additional charges", b.total_additional_charges),
        ("Total", b.total_cost),
    ];
    for (label, amount) in rows {
        let _ = writeln!(out, "{:<20}{:>20}", label, format_money(amount, currency));
    }

    if let Some(notes) = &quotation.notes {
        let _ = writeln!(out);
        let _ = writeln!(out, "Notes: {}", notes);
    }

    if b.has_warnings() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings:");
        for warning in &b.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }

    Ok(out)
}

/// Render the tiers of one destination, or the destination list when `tiers` is `None`
pub fn render_rates(
    destinations: &[String],
    tiers: Option<(&str, &[RateTier])>,
    currency: &str,
    format: OutputFormat,
) -> Result<String> {
    match tiers {
        Some((destination, tiers)) => {
            if let Some(serialized) = serialize(&tiers, format)? {
                return Ok(serialized);
            }

            let mut sorted: Vec<&RateTier> = tiers.iter().collect();
            sorted.sort_by(|a, b| a.lower_bound().total_cmp(&b.lower_bound()));

            let mut out = format!("{}\n", destination);
            if sorted.is_empty() {
                out.push_str("  (no rate tiers)\n");
            }
            for tier in sorted {
                let _ = writeln!(
                    out,
                    "  {:<16} {} {}/kg",
                    weight_band(tier),
                    format_amount(tier.rate),
                    currency
                );
            }
            Ok(out)
        }
        None => {
            if let Some(serialized) = serialize(&destinations, format)? {
                return Ok(serialized);
            }
            let mut out = String::new();
            for destination in destinations {
                let _ = writeln!(out, "{}", destination);
            }
            Ok(out)
        }
    }
}

/// Render a single volume weight
pub fn render_volume_weight(volume_weight: u64) -> String {
    format!("{} kg\n", volume_weight)
}

fn weight_band(tier: &RateTier) -> String {
    match (tier.min_weight, tier.max_weight) {
        (Some(min), Some(max)) => format!("{}-{} kg", format_amount(min), format_amount(max)),
        (Some(min), None) => format!("{}+ kg", format_amount(min)),
        (None, Some(max)) => format!("up to {} kg", format_amount(max)),
        (None, None) => "any weight".to_string(),
    }
}
