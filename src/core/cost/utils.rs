//! Cost Calculation Utilities
//!
//! Rounding and display helpers shared by the calculator and the CLI

use crate::core::cost::types::{AdditionalCharge, CM3_PER_CBM, CargoUnit};

/// Round half up (toward positive infinity), the carrier's rounding rule
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Sum of additional charge amounts, sign preserved
pub fn sum_additional_charges(charges: &[AdditionalCharge]) -> f64 {
    charges.iter().map(|c| c.amount).sum()
}

/// Total shipment volume in cubic metres, quantity included
pub fn total_volume_cbm(units: &[CargoUnit]) -> f64 {
    let cm3: f64 = units
        .iter()
        .map(|u| u.length * u.width * u.height * u.quantity as f64)
        .sum();
    cm3 / CM3_PER_CBM
}

/// Format an amount for display: whole numbers without decimals, otherwise two
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Format an amount with thousands separators and a currency code
pub fn format_money(amount: f64, currency: &str) -> String {
    let formatted = format_amount(amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{} {}", sign, grouped, frac, currency),
        None => format!("{}{} {}", sign, grouped, currency),
    }
}
